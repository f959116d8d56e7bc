//! Weekly lab-booking window, role-gated booking source selection and the
//! timetable helpers used by the scheduler views.

pub mod access;
pub mod lab;
pub mod source;
pub mod timetable;
pub mod window;

pub use access::BookingScope;
pub use lab::{bookings_on, resolve_week_bookings, week_days, WeekBookings};
pub use source::LabBookingSource;
pub use window::BookingWindow;
