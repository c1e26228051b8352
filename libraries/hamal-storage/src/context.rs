use crate::{reports, users};
use async_trait::async_trait;
use hamal_core::{
    error::Result,
    storage::StorageContext,
    types::{NewReport, Report, ReportId, ReportStatus, User, UserCredentials},
};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Reports
    async fn create_report(&self, report: NewReport) -> Result<Report> {
        Ok(reports::create(&self.pool, &report).await?)
    }

    async fn get_all_reports(&self) -> Result<Vec<Report>> {
        Ok(reports::get_all(&self.pool).await?)
    }

    async fn set_report_status(
        &self,
        id: ReportId,
        status: ReportStatus,
    ) -> Result<Option<Report>> {
        Ok(reports::set_status(&self.pool, id, status).await?)
    }

    // Users
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User> {
        Ok(users::create(&self.pool, username, password_hash).await?)
    }

    async fn get_user_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        Ok(users::get_credentials(&self.pool, username).await?)
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn count_users(&self) -> Result<i64> {
        Ok(users::count(&self.pool).await?)
    }
}
