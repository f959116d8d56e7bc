//! Client library for the university portal backend: session handling, the
//! per-screen repositories, the weekly lab-booking resolver and PDF export
//! of the scheduler tables.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod portal;
pub mod repositories;
pub mod scheduling;
pub mod state;
pub mod utils;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use portal::Portal;
