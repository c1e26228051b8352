/// API route modules
pub mod admin;
pub mod health;
pub mod home;
pub mod language;
pub mod reports;
pub mod users;
