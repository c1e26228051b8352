/// HTTP middleware
pub mod auth;

pub use auth::{admin_guard, AdminUser};
