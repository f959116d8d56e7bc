pub mod document;
pub mod faq;
pub mod link;
pub mod module;
pub mod notification;
pub mod role;
pub mod scheduler;
pub mod user;

pub use document::Document;
pub use faq::FaqEntry;
pub use link::RepositoryLink;
pub use module::{Assessment, ClassSession, Module};
pub use notification::Notification;
pub use role::RoleSet;
pub use scheduler::{ClassScheduleItem, LabBooking};
pub use user::{ModuleMini, User};

pub(crate) fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
