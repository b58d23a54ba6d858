//! Deterministic password hashers shared by the engine and handler tests.
//!
//! The fake keeps register-then-login flows honest without paying the Argon2
//! cost on every test: a hash is recoverable from its password, so only the
//! password used at creation verifies against it.

use crate::domain::{
    error::DomainError, models::credential::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Deterministic stand-in for the Argon2 hasher.
#[derive(Clone)]
pub struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        if plain_password.is_empty() {
            return Err(DomainError::Hashing("empty password".to_string()));
        }
        Ok(HashedPassword::new(format!("fake${plain_password}")))
    }

    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError> {
        Ok(hashed_password.as_str() == format!("fake${plain_password}"))
    }
}

/// Hasher whose operations always fail, for error-propagation tests.
#[derive(Clone)]
pub struct FailingPasswordHasher;

impl PasswordHasher for FailingPasswordHasher {
    fn hash(&self, _plain_password: &str) -> Result<HashedPassword, DomainError> {
        Err(DomainError::Hashing("hasher unavailable".to_string()))
    }

    fn verify(
        &self,
        _plain_password: &str,
        _hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Hashing("hasher unavailable".to_string()))
    }
}
