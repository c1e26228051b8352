//! HamalNews Server Library
//!
//! Bilingual citizen-reporting web application: registration, anonymous
//! report submission, and an admin panel for approving or rejecting reports.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use i18n::Language;
pub use routes::create_router;
pub use services::auth::AuthService;
pub use state::AppState;
