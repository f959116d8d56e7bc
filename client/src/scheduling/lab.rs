use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use super::{
    access::BookingScope,
    source::{fetch_scoped, LabBookingSource},
    window::BookingWindow,
};
use crate::{error::ApiError, models::LabBooking, state::SessionStore};

/// Lab bookings ready for display, with the window and scope that produced
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBookings {
    pub window: BookingWindow,
    pub scope: BookingScope,
    pub bookings: Vec<LabBooking>,
}

/// Reads the roles once, issues the matching upstream query and keeps the
/// bookings inside this week's window. Dropping the future cancels the
/// in-flight request.
pub async fn resolve_week_bookings(
    source: &dyn LabBookingSource,
    session: &dyn SessionStore,
    today: NaiveDate,
) -> Result<WeekBookings, ApiError> {
    let scope = BookingScope::for_roles(&session.roles());
    let window = BookingWindow::for_today(today);
    let span = tracing::debug_span!(
        "resolve_week_bookings",
        ?scope,
        week_start = %window.start(),
        week_end = %window.end()
    );

    async move {
        let fetched = fetch_scoped(source, scope).await?;
        let total = fetched.len();
        let bookings = window.filter(fetched);
        tracing::debug!(total, kept = bookings.len(), "Resolved lab bookings");
        Ok(WeekBookings {
            window,
            scope,
            bookings,
        })
    }
    .instrument(span)
    .await
}

/// Monday through Saturday of the window.
pub fn week_days(window: &BookingWindow) -> Vec<NaiveDate> {
    window.days()
}

/// Bookings on one day, earliest start first.
pub fn bookings_on(bookings: &[LabBooking], day: NaiveDate) -> Vec<LabBooking> {
    let key = day.format("%Y-%m-%d").to_string();
    let mut selected: Vec<LabBooking> = bookings
        .iter()
        .filter(|booking| booking.booking_date == key)
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleSet;
    use crate::scheduling::source::MockLabBookingSource;
    use crate::state::session::MockSessionStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(id: i32, booking_date: &str, start: &str) -> LabBooking {
        LabBooking {
            id,
            user_name: "jdoe".into(),
            first_name: None,
            last_name: None,
            week_days: "Tuesday".into(),
            start_time: start.into(),
            end_time: "17:00".into(),
            description: None,
            booking_date: booking_date.into(),
        }
    }

    fn session_with(roles: &'static [&'static str]) -> MockSessionStore {
        let mut session = MockSessionStore::new();
        session
            .expect_roles()
            .times(1)
            .returning(move || RoleSet::new(roles.iter().copied()));
        session
    }

    #[tokio::test]
    async fn privileged_session_gets_all_bookings_windowed() {
        let session = session_with(&["Admin"]);
        let mut source = MockLabBookingSource::new();
        source.expect_fetch_mine().never();
        source.expect_fetch_all().times(1).returning(|| {
            Ok(vec![
                booking(1, "2024-06-03", "08:00"),
                booking(2, "2024-06-11", "09:00"),
                booking(3, "bad-date", "10:00"),
                booking(4, "2024-06-15", "11:00"),
            ])
        });

        let week = resolve_week_bookings(&source, &session, date(2024, 6, 12))
            .await
            .unwrap();
        assert_eq!(week.scope, BookingScope::All);
        assert_eq!(week.window.start(), date(2024, 6, 10));
        let ids: Vec<i32> = week.bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn unprivileged_session_gets_own_bookings_windowed() {
        let session = session_with(&["Lecturer"]);
        let mut source = MockLabBookingSource::new();
        source.expect_fetch_all().never();
        source.expect_fetch_mine().times(1).returning(|| {
            Ok(vec![
                booking(5, "2024-06-10", "08:00"),
                booking(6, "2024-06-16", "08:00"),
            ])
        });

        let week = resolve_week_bookings(&source, &session, date(2024, 6, 9))
            .await
            .unwrap();
        assert_eq!(week.scope, BookingScope::Mine);
        assert_eq!(week.bookings.len(), 1);
        assert_eq!(week.bookings[0].id, 5);
    }

    #[tokio::test]
    async fn empty_roles_fall_back_to_own_bookings() {
        let session = session_with(&[]);
        let mut source = MockLabBookingSource::new();
        source.expect_fetch_all().never();
        source.expect_fetch_mine().times(1).returning(|| Ok(Vec::new()));

        let week = resolve_week_bookings(&source, &session, date(2024, 6, 12))
            .await
            .unwrap();
        assert_eq!(week.scope, BookingScope::Mine);
        assert!(week.bookings.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated() {
        let session = session_with(&["Coordinator"]);
        let mut source = MockLabBookingSource::new();
        source
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)));

        let err = resolve_week_bookings(&source, &session, date(2024, 6, 12))
            .await
            .unwrap_err();
        assert_eq!(err.code, "SERVER_ERROR");
    }

    #[tokio::test]
    async fn roles_are_reread_on_every_resolution() {
        let mut session = MockSessionStore::new();
        let mut seq = mockall::Sequence::new();
        session
            .expect_roles()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| RoleSet::new(["Admin"]));
        session
            .expect_roles()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| RoleSet::new(["Student"]));

        let mut source = MockLabBookingSource::new();
        source.expect_fetch_all().times(1).returning(|| Ok(Vec::new()));
        source.expect_fetch_mine().times(1).returning(|| Ok(Vec::new()));

        let today = date(2024, 6, 12);
        let first = resolve_week_bookings(&source, &session, today).await.unwrap();
        let second = resolve_week_bookings(&source, &session, today).await.unwrap();
        assert_eq!(first.scope, BookingScope::All);
        assert_eq!(second.scope, BookingScope::Mine);
    }

    #[test]
    fn bookings_on_filters_by_date_and_sorts_by_start() {
        let all = vec![
            booking(1, "2024-06-11", "13:00"),
            booking(2, "2024-06-12", "08:00"),
            booking(3, "2024-06-11", "08:30:00"),
            booking(4, "2024-06-11", "08:00"),
        ];
        let day = bookings_on(&all, date(2024, 6, 11));
        let ids: Vec<i32> = day.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 3, 1]);
        assert!(bookings_on(&all, date(2024, 6, 13)).is_empty());
    }
}
