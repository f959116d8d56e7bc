use super::{
    client::ApiClient,
    types::{AssessmentDto, ClassScheduleDto, LabBookingDto},
};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_all_lab_bookings(&self) -> Result<Vec<LabBookingDto>, ApiError> {
        self.get_json("api/Scheduler/lab", &[]).await
    }

    /// Server-side filtered to the signed-in account.
    pub async fn get_my_lab_bookings(&self) -> Result<Vec<LabBookingDto>, ApiError> {
        self.get_json("api/Scheduler/lab/user", &[]).await
    }

    pub async fn get_class_schedule(
        &self,
        semester: i32,
    ) -> Result<Vec<ClassScheduleDto>, ApiError> {
        self.get_json(&format!("api/Scheduler/class/{}", semester), &[])
            .await
    }

    pub async fn get_assessment_schedule(
        &self,
        semester: i32,
    ) -> Result<Vec<AssessmentDto>, ApiError> {
        self.get_json(&format!("api/Scheduler/assessment/{}", semester), &[])
            .await
    }
}
