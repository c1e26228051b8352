//! User registration and credential queries

use crate::error::{Result, StorageError};
use hamal_core::types::{Role, User, UserCredentials, UserId};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    username: String,
    role: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self> {
        let role = Role::from_str(&row.role).ok_or_else(|| {
            StorageError::CorruptRow(format!("user {} has role '{}'", row.id, row.role))
        })?;

        Ok(User {
            id: row.id,
            username: row.username,
            role,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    password_hash: String,
}

/// Create a user, granting `admin` to the very first account
///
/// The emptiness check runs inside the `INSERT` itself, so two concurrent
/// registrations cannot both observe an empty table.
///
/// # Errors
///
/// Returns `StorageError::Conflict` if the username is already taken
pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<User> {
    let now = chrono::Utc::now().timestamp();

    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (username, password_hash, role, created_at)
         SELECT ?, ?, CASE WHEN EXISTS (SELECT 1 FROM users) THEN ? ELSE ? END, ?
         RETURNING id, username, role, created_at",
    )
    .bind(username)
    .bind(password_hash)
    .bind(Role::User.as_str())
    .bind(Role::Admin.as_str())
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| map_insert_error(e, username))?;

    User::try_from(row)
}

fn map_insert_error(err: sqlx::Error, username: &str) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.message().contains("users.username") {
            return StorageError::Conflict(format!("username '{username}' is already taken"));
        }
    }
    StorageError::Database(err)
}

/// Get a user and their password hash for authentication
pub async fn get_credentials(pool: &SqlitePool, username: &str) -> Result<Option<UserCredentials>> {
    let row = sqlx::query_as::<_, CredentialsRow>(
        "SELECT id, username, role, created_at, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    row.map(|r| {
        Ok(UserCredentials {
            user: User::try_from(r.user)?,
            password_hash: r.password_hash,
        })
    })
    .transpose()
}

/// Get all users in registration order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, role, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(User::try_from).collect()
}

/// Number of registered users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
