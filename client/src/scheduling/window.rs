use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::LabBooking;

/// Inclusive Monday to Saturday range shown by the lab scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl BookingWindow {
    /// On Sunday the window is the coming week; otherwise the week holding
    /// `today`.
    pub fn for_today(today: NaiveDate) -> Self {
        let start = match today.weekday() {
            Weekday::Sun => today + Duration::days(1),
            weekday => today - Duration::days(i64::from(weekday.num_days_from_monday())),
        };
        Self {
            start,
            end: start + Duration::days(5),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The six displayed dates, Monday first.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(6).collect()
    }

    /// Keeps bookings dated inside the window, in input order. Bookings with
    /// an unparsable date are dropped.
    pub fn filter(&self, bookings: Vec<LabBooking>) -> Vec<LabBooking> {
        bookings
            .into_iter()
            .filter(|booking| match booking.date() {
                Some(date) => self.contains(date),
                None => {
                    tracing::warn!(
                        booking_id = booking.id,
                        booking_date = %booking.booking_date,
                        "Dropping booking with malformed date"
                    );
                    false
                }
            })
            .collect()
    }
}
