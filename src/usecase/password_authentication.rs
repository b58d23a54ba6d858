use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    models::{credential::HashedPassword, principal::Principal},
    repositories::{
        credential_repository::CredentialRepository, principal_repository::PrincipalRepository,
    },
    services::{authentication_service::AuthenticationEngine, password_service::PasswordHasher},
};

/// Password authentication engine.
///
/// Stateless orchestration over the injected principal store, credential
/// store and hash service; all durable state lives in the stores, so one
/// engine value is safe to share across concurrent requests. Mismatches of
/// any kind come back as `Ok(None)`; errors are reserved for validation,
/// hashing and store failures, which propagate unchanged without retries or
/// compensating writes.
pub struct PasswordAuthentication<P: PrincipalRepository, C: CredentialRepository, H: PasswordHasher>
{
    principals: P,
    credentials: C,
    hasher: H,
}

impl<P: PrincipalRepository, C: CredentialRepository, H: PasswordHasher>
    PasswordAuthentication<P, C, H>
{
    pub fn new(principals: P, credentials: C, hasher: H) -> Self {
        Self {
            principals,
            credentials,
            hasher,
        }
    }

    /// Create a principal together with its first credential.
    ///
    /// The password never reaches the principal store; only its hash is
    /// persisted, as a credential record stamped with the creation time. If
    /// the credential insert fails after the principal was created, the
    /// principal is left without a credential; callers needing atomicity must
    /// supply transactional stores.
    pub async fn create_principal(
        &self,
        attrs: P::NewPrincipal,
        password: &str,
    ) -> Result<Uuid, DomainError>
    where
        P: Send + Sync,
        C: Send + Sync,
        H: Send + Sync + 'static,
    {
        if password.is_empty() {
            return Err(DomainError::EmptyPassword);
        }

        // Hash before touching the stores: a hashing failure must not leave
        // a principal behind.
        let password_hash = self.hash_password(password).await?;

        let principal_id = self.principals.create_principal(attrs).await?;

        self.credentials
            .create_credential(principal_id, password_hash, Utc::now())
            .await?;

        tracing::info!(%principal_id, "principal created");
        Ok(principal_id)
    }

    /// Check a login/password pair against the current credential.
    ///
    /// Unknown login, missing credential, deactivated credential and wrong
    /// password all produce the same `Ok(None)`.
    pub async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<P::Principal>, DomainError>
    where
        P: Send + Sync,
        C: Send + Sync,
        H: Send + Sync + 'static,
    {
        let principal = match self.principals.find_active_by_login(login).await? {
            Some(principal) => principal,
            None => {
                tracing::debug!(login, "authentication rejected");
                return Ok(None);
            }
        };

        let credential = match self.credentials.find_latest_active(principal.id()).await? {
            Some(credential) => credential,
            None => {
                tracing::debug!(login, "authentication rejected");
                return Ok(None);
            }
        };

        let valid = self
            .verify_password(password, credential.password_hash().clone())
            .await?;
        if !valid {
            tracing::debug!(login, "authentication rejected");
            return Ok(None);
        }

        Ok(Some(principal))
    }

    /// Append a fresh credential for the principal.
    ///
    /// Existing records stay in place; readers pick the new one by its later
    /// creation time. Deactivating superseded records is a separate
    /// administrative action through the credential store.
    pub async fn rotate_password(
        &self,
        principal_id: Uuid,
        new_password: &str,
    ) -> Result<Uuid, DomainError>
    where
        C: Send + Sync,
        H: Send + Sync + 'static,
    {
        if new_password.is_empty() {
            return Err(DomainError::EmptyPassword);
        }

        let password_hash = self.hash_password(new_password).await?;
        let credential_id = self
            .credentials
            .create_credential(principal_id, password_hash, Utc::now())
            .await?;

        tracing::info!(%principal_id, %credential_id, "password rotated");
        Ok(credential_id)
    }

    // Argon2 is CPU-bound; both helpers run it on the blocking pool so
    // in-flight requests are not starved.
    async fn hash_password(&self, password: &str) -> Result<HashedPassword, DomainError>
    where
        H: Send + Sync + 'static,
    {
        let hasher = self.hasher.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Hashing(e.to_string()))?
    }

    async fn verify_password(
        &self,
        password: &str,
        password_hash: HashedPassword,
    ) -> Result<bool, DomainError>
    where
        H: Send + Sync + 'static,
    {
        let hasher = self.hasher.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| DomainError::Hashing(e.to_string()))?
    }
}

#[async_trait]
impl<P, C, H> AuthenticationEngine for PasswordAuthentication<P, C, H>
where
    P: PrincipalRepository + Send + Sync,
    C: CredentialRepository + Send + Sync,
    H: PasswordHasher + Send + Sync + 'static,
{
    type Principal = P::Principal;

    async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<Self::Principal>, DomainError> {
        self.authenticate(login, password).await
    }
}
