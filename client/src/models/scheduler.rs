use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::types::{ClassScheduleDto, LabBookingDto};
use crate::utils::time::parse_iso_date;

/// One reserved lab slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabBooking {
    pub id: i32,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Free text, display only. Never checked against `booking_date`.
    pub week_days: String,
    pub start_time: String,
    pub end_time: String,
    pub description: Option<String>,
    /// `yyyy-MM-dd`, kept as received.
    pub booking_date: String,
}

impl LabBooking {
    pub fn date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.booking_date)
    }

    /// Full name from the name parts, or the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.user_name.clone()
        } else {
            full
        }
    }

    /// "Booked by" label. Bare student numbers are not shown.
    pub fn booked_by(&self) -> Option<String> {
        let name = self.display_name();
        if name.trim().is_empty() || looks_like_student_number(&name) {
            None
        } else {
            Some(name)
        }
    }
}

pub fn looks_like_student_number(raw: &str) -> bool {
    (6..=12).contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit())
}

impl From<LabBookingDto> for LabBooking {
    fn from(dto: LabBookingDto) -> Self {
        Self {
            id: dto.id,
            user_name: dto.user_name,
            first_name: dto.first_name,
            last_name: dto.last_name,
            week_days: dto.week_days,
            start_time: dto.start_time,
            end_time: dto.end_time,
            description: dto.description,
            booking_date: dto.booking_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScheduleItem {
    pub module_code: String,
    pub module_name: String,
    pub venue: String,
    pub week_day: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<ClassScheduleDto> for ClassScheduleItem {
    fn from(dto: ClassScheduleDto) -> Self {
        Self {
            module_code: dto.module_code,
            module_name: dto.module_name,
            venue: dto.venue,
            week_day: dto.week_day,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}
