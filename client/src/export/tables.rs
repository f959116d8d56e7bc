use serde::Serialize;

use super::pdf::build_simple_table_pdf;
use crate::{
    models::{Assessment, ClassScheduleItem, LabBooking},
    scheduling::timetable::classes_on,
    utils::time::{format_date, hhmm},
};

pub const LAB_SCHEDULE_FILE_NAME: &str = "Lab_Schedule.pdf";

/// Title, column headers and text cells of one exported table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    fn new(title: impl Into<String>, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn to_pdf(&self) -> Vec<u8> {
        build_simple_table_pdf(&self.title, &self.headers, &self.rows)
    }
}

pub fn lab_table(bookings: &[LabBooking]) -> TableData {
    let rows = bookings
        .iter()
        .map(|b| {
            vec![
                format_date(&b.booking_date),
                b.week_days.clone(),
                hhmm(&b.start_time).to_string(),
                hhmm(&b.end_time).to_string(),
                b.booked_by().unwrap_or_default(),
                b.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    TableData::new(
        "Lab Schedule",
        &["Date", "Day(s)", "Start", "End", "Booked By", "Description"],
        rows,
    )
}

const CLASS_HEADERS: [&str; 6] = ["Day", "Start", "End", "Module", "Name", "Venue"];

fn class_rows(items: &[ClassScheduleItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| {
            vec![
                c.week_day.clone(),
                hhmm(&c.start_time).to_string(),
                hhmm(&c.end_time).to_string(),
                c.module_code.clone(),
                c.module_name.clone(),
                c.venue.clone(),
            ]
        })
        .collect()
}

pub fn class_table(items: &[ClassScheduleItem]) -> TableData {
    TableData::new("Class Timetable", &CLASS_HEADERS, class_rows(items))
}

/// Only the classes held on `week_day`.
pub fn class_table_for_day(items: &[ClassScheduleItem], week_day: &str) -> TableData {
    TableData::new(
        format!("Class Timetable \u{2022} {}", week_day),
        &CLASS_HEADERS,
        class_rows(&classes_on(items, week_day)),
    )
}

pub fn assessment_table(items: &[Assessment]) -> TableData {
    let rows = items
        .iter()
        .map(|a| {
            let end = a.end_time.as_deref().or(a.due_time.as_deref()).unwrap_or("");
            vec![
                format_date(&a.date),
                hhmm(a.start_time.as_deref().unwrap_or("")).to_string(),
                hhmm(end).to_string(),
                a.title.clone(),
                a.venue.clone().unwrap_or_default(),
                if a.is_timed { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();
    TableData::new(
        "Assessments",
        &["Date", "Start", "End/Due", "Title", "Venue", "Timed"],
        rows,
    )
}

pub fn class_timetable_file_name(semester: i32) -> String {
    format!("Class_Timetable_Sem{}.pdf", semester)
}

pub fn assessments_file_name(semester: i32) -> String {
    format!("Assessments_Sem{}.pdf", semester)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(code: &str, day: &str) -> ClassScheduleItem {
        ClassScheduleItem {
            module_code: code.into(),
            module_name: "Networks".into(),
            venue: "Lab 3".into(),
            week_day: day.into(),
            start_time: "08:00:00".into(),
            end_time: "09:30:00".into(),
        }
    }

    #[test]
    fn lab_table_formats_and_hides_student_numbers() {
        let bookings = vec![
            LabBooking {
                id: 1,
                user_name: "201912345".into(),
                first_name: None,
                last_name: None,
                week_days: "Wednesday".into(),
                start_time: "10:00:00".into(),
                end_time: "12:00:00".into(),
                description: Some("Project demo".into()),
                booking_date: "2024-06-12".into(),
            },
            LabBooking {
                id: 2,
                user_name: "jdoe".into(),
                first_name: Some("Jane".into()),
                last_name: Some("Doe".into()),
                week_days: "Thursday".into(),
                start_time: "14:00".into(),
                end_time: "15:00".into(),
                description: None,
                booking_date: "2024-06-13".into(),
            },
        ];
        let table = lab_table(&bookings);
        assert_eq!(table.title, "Lab Schedule");
        assert_eq!(table.headers[4], "Booked By");
        assert_eq!(
            table.rows[0],
            vec!["12 Jun 2024", "Wednesday", "10:00", "12:00", "", "Project demo"]
        );
        assert_eq!(table.rows[1][4], "Jane Doe");
        assert_eq!(table.rows[1][5], "");
    }

    #[test]
    fn class_table_for_day_filters_and_titles() {
        let items = vec![class("CSI1", "Monday"), class("CSI2", "Tuesday")];
        let table = class_table_for_day(&items, "monday");
        assert_eq!(table.title, "Class Timetable \u{2022} monday");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0],
            vec!["Monday", "08:00", "09:30", "CSI1", "Networks", "Lab 3"]
        );
        assert_eq!(class_table(&items).rows.len(), 2);
    }

    #[test]
    fn assessment_table_uses_due_time_and_timed_flag() {
        let items = vec![Assessment {
            id: 1,
            title: "Essay".into(),
            description: None,
            module_code: None,
            date: "2024-06-14".into(),
            start_time: None,
            end_time: None,
            due_time: Some("23:59:00".into()),
            venue: None,
            is_timed: false,
        }];
        let table = assessment_table(&items);
        assert_eq!(table.headers[2], "End/Due");
        assert_eq!(table.rows[0], vec!["14 Jun 2024", "", "23:59", "Essay", "", "No"]);
    }

    #[test]
    fn file_names_carry_the_semester() {
        assert_eq!(class_timetable_file_name(2), "Class_Timetable_Sem2.pdf");
        assert_eq!(assessments_file_name(1), "Assessments_Sem1.pdf");
        assert_eq!(LAB_SCHEDULE_FILE_NAME, "Lab_Schedule.pdf");
    }

    #[test]
    fn to_pdf_renders_the_title() {
        let pdf = class_table(&[class("CSI1", "Monday")]).to_pdf();
        let text = String::from_utf8(pdf).unwrap();
        assert!(text.contains("(Class Timetable)"));
    }
}
