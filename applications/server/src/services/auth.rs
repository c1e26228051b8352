/// Authentication service - password handling
use hamal_core::{HamalError, PasswordHasher};

/// Valid bcrypt cost range (mirrors the bcrypt crate's private `MIN_COST`/`MAX_COST`)
pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct AuthService {
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }
}

impl PasswordHasher for AuthService {
    /// Hash a password using bcrypt
    fn hash_password(&self, password: &str) -> hamal_core::Result<String> {
        bcrypt::hash(password, self.bcrypt_cost).map_err(bcrypt_error)
    }

    /// Verify a password against a hash
    fn verify_password(&self, password: &str, hash: &str) -> hamal_core::Result<bool> {
        bcrypt::verify(password, hash).map_err(bcrypt_error)
    }
}

fn bcrypt_error(err: bcrypt::BcryptError) -> HamalError {
    HamalError::Other(format!("Password hashing failed: {err}"))
}
