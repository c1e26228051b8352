//! HamalNews Storage
//!
//! `SQLite` persistence for users and reports.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`reports`, `users`)
//! - **Scoped Connections**: Every query borrows a pooled connection for one
//!   statement and hands it back, success or failure
//! - **Embedded Migrations**: The schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use hamal_storage::{LocalStorageContext, create_pool, run_migrations};
//! use hamal_core::{NewReport, StorageContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://db.sqlite").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! storage.create_report(NewReport::new("Title", "Content")?).await?;
//! let reports = storage.get_all_reports().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod reports;
pub mod users;

pub use context::LocalStorageContext;
pub use error::StorageError;

pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://db.sqlite>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Each in-memory connection is its own database
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool ready");

    Ok(pool)
}

/// Create a pool and bring its schema up to date
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn open(database_url: &str) -> Result<LocalStorageContext, StorageError> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    Ok(LocalStorageContext::new(pool))
}
