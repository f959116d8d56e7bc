use async_trait::async_trait;

use super::access::BookingScope;
use crate::{api::ApiClient, error::ApiError, models::LabBooking};

/// Upstream lab-booking queries. Neither call filters beyond the
/// all-versus-mine split.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabBookingSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<LabBooking>, ApiError>;
    async fn fetch_mine(&self) -> Result<Vec<LabBooking>, ApiError>;
}

#[async_trait]
impl LabBookingSource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<LabBooking>, ApiError> {
        let dtos = self.get_all_lab_bookings().await?;
        Ok(dtos.into_iter().map(LabBooking::from).collect())
    }

    async fn fetch_mine(&self) -> Result<Vec<LabBooking>, ApiError> {
        let dtos = self.get_my_lab_bookings().await?;
        Ok(dtos.into_iter().map(LabBooking::from).collect())
    }
}

/// Issues exactly one query, picked by `scope`.
pub async fn fetch_scoped(
    source: &dyn LabBookingSource,
    scope: BookingScope,
) -> Result<Vec<LabBooking>, ApiError> {
    match scope {
        BookingScope::All => source.fetch_all().await,
        BookingScope::Mine => source.fetch_mine().await,
    }
}
