//! Thin data-access layer over [`ApiClient`](crate::api::ApiClient): maps
//! wire types to models and applies the client-side rules each screen needs.

pub mod auth;
pub mod faq;
pub mod links;
pub mod modules;
pub mod notifications;
pub mod scheduler;

pub use auth::AuthRepository;
pub use faq::{filter_by_keywords, FaqRepository};
pub use links::{LinksRepository, RepositoryOverview};
pub use modules::{DocumentsRepository, ModulesRepository};
pub use notifications::{apply_read, unread_count, NotificationsRepository};
pub use scheduler::SchedulerRepository;
