use chrono::{NaiveDate, Weekday};

use crate::models::{Assessment, ClassScheduleItem};
use crate::utils::time::parse_iso_date;

const CLASS_DAYS: [&str; 6] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// 1-based teaching-day position, `None` for Sunday or unknown labels.
pub fn weekday_order(label: &str) -> Option<usize> {
    let label = label.trim().to_lowercase();
    CLASS_DAYS
        .iter()
        .position(|day| *day == label)
        .map(|idx| idx + 1)
}

/// The class view never selects Sunday.
pub fn today_or_monday(today: Weekday) -> Weekday {
    if today == Weekday::Sun {
        Weekday::Mon
    } else {
        today
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Drops non-teaching days, then orders by day, start time and module code.
pub fn normalize_classes(items: &[ClassScheduleItem]) -> Vec<ClassScheduleItem> {
    let mut kept: Vec<(usize, ClassScheduleItem)> = items
        .iter()
        .filter_map(|item| weekday_order(&item.week_day).map(|order| (order, item.clone())))
        .collect();
    kept.sort_by(|(oa, a), (ob, b)| {
        oa.cmp(ob)
            .then_with(|| a.start_time.cmp(&b.start_time))
            .then_with(|| a.module_code.cmp(&b.module_code))
    });
    kept.into_iter().map(|(_, item)| item).collect()
}

pub fn classes_on(items: &[ClassScheduleItem], week_day: &str) -> Vec<ClassScheduleItem> {
    items
        .iter()
        .filter(|item| item.week_day.trim().eq_ignore_ascii_case(week_day.trim()))
        .cloned()
        .collect()
}

/// Orders by date, then start or due time, then title.
pub fn sort_assessments(items: &mut [Assessment]) {
    items.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.sort_time().cmp(b.sort_time()))
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Assessments on or after `today`, sorted. Undated entries are skipped.
pub fn upcoming_assessments(items: &[Assessment], today: NaiveDate) -> Vec<Assessment> {
    let mut upcoming: Vec<Assessment> = items
        .iter()
        .filter(|a| parse_iso_date(&a.date).is_some_and(|date| date >= today))
        .cloned()
        .collect();
    sort_assessments(&mut upcoming);
    upcoming
}
