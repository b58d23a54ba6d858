use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password.
    ///
    /// The output is self-describing: algorithm, cost parameters and a fresh
    /// random salt are embedded in it, so hashing the same password twice
    /// yields different strings and cost parameters can evolve without
    /// invalidating stored hashes. Fails with `DomainError::Hashing` on empty
    /// input or an algorithm failure.
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password in constant
    /// time.
    ///
    /// A well-formed hash that does not match yields `Ok(false)`; only a
    /// structurally invalid hash is an error (`DomainError::MalformedHash`).
    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError>;
}
