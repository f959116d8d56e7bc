//! Printable exports of the scheduler tables.

pub mod pdf;
pub mod tables;

pub use pdf::build_simple_table_pdf;
pub use tables::{
    assessment_table, assessments_file_name, class_table, class_table_for_day,
    class_timetable_file_name, lab_table, TableData, LAB_SCHEDULE_FILE_NAME,
};
