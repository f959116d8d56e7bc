mod auth;
pub mod client;
mod faq;
mod modules;
mod notifications;
mod repository;
mod scheduler;
pub mod types;

pub use client::ApiClient;
pub use types::*;
