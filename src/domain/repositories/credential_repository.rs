use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::credential::{Credential, HashedPassword},
};

/// Store contract for password records.
#[async_trait]
pub trait CredentialRepository {
    /// Append a new active credential and return its generated id. Existing
    /// records for the principal are left untouched.
    async fn create_credential(
        &self,
        principal_id: Uuid,
        password_hash: HashedPassword,
        create_timestamp: DateTime<Utc>,
    ) -> Result<Uuid, RepositoryError>;

    /// The current credential for a principal: among records whose
    /// `deactivate_timestamp` is unset, the one with the latest
    /// `create_timestamp`, ties broken by `id` ascending.
    async fn find_latest_active(
        &self,
        principal_id: Uuid,
    ) -> Result<Option<Credential>, RepositoryError>;

    /// Set `deactivate_timestamp` on an active credential. Fails with
    /// `RepositoryError::NotFound` when the record does not exist or was
    /// already deactivated; an existing deactivation time is never
    /// overwritten.
    async fn deactivate(
        &self,
        credential_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}
