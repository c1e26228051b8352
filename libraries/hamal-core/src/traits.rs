/// Core traits for HamalNews
use crate::error::Result;

/// One-way password hashing
///
/// The lifecycle never sees a hashing algorithm directly; the server supplies
/// one (bcrypt) and tests may supply a cheap stand-in.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    ///
    /// # Errors
    /// Returns an error if the hashing backend fails
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// # Errors
    /// Returns an error if the stored hash is malformed
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}
