//! Storage trait for the persistence collaborator

use crate::error::Result;
use crate::types::{NewReport, Report, ReportId, ReportStatus, User, UserCredentials};
use async_trait::async_trait;

/// Storage context providing access to database operations
///
/// Implementations own all persisted state; callers hold only the values
/// returned for the duration of one request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Reports
    // ========================================================================

    /// Insert a new report with status `pending`
    async fn create_report(&self, report: NewReport) -> Result<Report>;

    /// Get all reports in insertion order
    async fn get_all_reports(&self) -> Result<Vec<Report>>;

    /// Overwrite a report's status, returning `None` if the report does not exist
    async fn set_report_status(&self, id: ReportId, status: ReportStatus)
        -> Result<Option<Report>>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Insert a user, granting `admin` if and only if no user exists yet.
    ///
    /// The emptiness check and the insert must be a single atomic step.
    /// A taken username yields `HamalError::Conflict`.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User>;

    /// Look up a user and their password hash by username
    async fn get_user_credentials(&self, username: &str) -> Result<Option<UserCredentials>>;

    /// Get all users in registration order
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Number of registered users
    async fn count_users(&self) -> Result<i64>;
}
