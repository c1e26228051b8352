/// User domain types
use super::ids::UserId;
use super::report::required;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Unique login name
    pub username: String,

    pub role: Role,

    /// Account creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

/// A user together with the stored password hash
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Validated registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    /// Validate a registration.
    ///
    /// The username is trimmed; the password is checked for content but kept
    /// verbatim.
    ///
    /// # Errors
    /// Returns `HamalError::Validation` if either field is blank.
    pub fn new(username: &str, password: &str) -> Result<Self> {
        let username = required("username", username)?;
        required("password", password)?;
        Ok(Self {
            username,
            password: password.to_string(),
        })
    }
}
