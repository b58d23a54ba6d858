use thiserror::Error;

/// Failures surfaced by the authentication engine and domain models.
///
/// An authentication mismatch is never an error: `authenticate` reports it as
/// `Ok(None)` so that wrong-password, unknown-login, missing-credential and
/// deactivated-credential outcomes stay indistinguishable to callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Empty password")]
    EmptyPassword,

    #[error("Empty login")]
    EmptyLogin,

    #[error("Unknown principal status: {0}")]
    UnknownStatus(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
