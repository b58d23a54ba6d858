//! In-memory store implementations with the same contract semantics as the
//! Postgres repositories, so engine and handler tests run without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::{Credential, HashedPassword},
        principal::{IamPrincipal, NewPrincipal, PrincipalStatus},
    },
    repositories::{
        credential_repository::CredentialRepository, principal_repository::PrincipalRepository,
    },
};

#[derive(Clone, Default)]
pub struct MemoryPrincipalRepository {
    principals: Arc<RwLock<Vec<IamPrincipal>>>,
}

impl MemoryPrincipalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a principal directly, bypassing creation-time defaults. Lets
    /// tests set up inactive principals and other arbitrary shapes.
    pub fn insert_principal(&self, principal: IamPrincipal) -> Uuid {
        let id = principal.id();
        self.principals
            .write()
            .expect("principal store lock")
            .push(principal);
        id
    }
}

#[async_trait]
impl PrincipalRepository for MemoryPrincipalRepository {
    type Principal = IamPrincipal;
    type NewPrincipal = NewPrincipal;

    async fn create_principal(&self, attrs: NewPrincipal) -> Result<Uuid, RepositoryError> {
        let mut principals = self.principals.write().expect("principal store lock");
        if principals.iter().any(|p| p.login() == attrs.login) {
            return Err(RepositoryError::Duplicate(format!(
                "login '{}' already exists",
                attrs.login
            )));
        }

        let id = Uuid::new_v4();
        let principal = IamPrincipal::new(
            id,
            attrs.login,
            attrs.kind,
            attrs.name,
            PrincipalStatus::Active,
            Utc::now(),
        )
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        principals.push(principal);
        Ok(id)
    }

    async fn find_active_by_login(
        &self,
        login: &str,
    ) -> Result<Option<IamPrincipal>, RepositoryError> {
        let principals = self.principals.read().expect("principal store lock");
        Ok(principals
            .iter()
            .find(|p| p.login() == login && p.is_active())
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct MemoryCredentialRepository {
    credentials: Arc<RwLock<Vec<Credential>>>,
}

impl MemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records held for a principal, active or not, for history
    /// assertions.
    pub fn records_for(&self, principal_id: Uuid) -> Vec<Credential> {
        self.credentials
            .read()
            .expect("credential store lock")
            .iter()
            .filter(|c| c.principal_id() == principal_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    async fn create_credential(
        &self,
        principal_id: Uuid,
        password_hash: HashedPassword,
        create_timestamp: DateTime<Utc>,
    ) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        self.credentials
            .write()
            .expect("credential store lock")
            .push(Credential::new(
                id,
                principal_id,
                password_hash,
                create_timestamp,
            ));
        Ok(id)
    }

    async fn find_latest_active(
        &self,
        principal_id: Uuid,
    ) -> Result<Option<Credential>, RepositoryError> {
        let credentials = self.credentials.read().expect("credential store lock");
        let mut active: Vec<&Credential> = credentials
            .iter()
            .filter(|c| c.principal_id() == principal_id && c.is_active())
            .collect();
        active.sort_by(|a, b| {
            b.create_timestamp()
                .cmp(&a.create_timestamp())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(active.first().map(|c| (*c).clone()))
    }

    async fn deactivate(
        &self,
        credential_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut credentials = self.credentials.write().expect("credential store lock");
        match credentials
            .iter_mut()
            .find(|c| c.id() == credential_id && c.is_active())
        {
            Some(credential) => {
                credential.deactivate(at);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(login: &str) -> NewPrincipal {
        NewPrincipal::new(login.to_string(), "user".to_string(), login.to_string())
            .expect("valid attrs")
    }

    #[tokio::test]
    async fn create_principal_rejects_duplicate_logins() {
        let repo = MemoryPrincipalRepository::new();
        repo.create_principal(attrs("carol")).await.expect("first");

        let second = repo.create_principal(attrs("carol")).await;
        assert!(matches!(second, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn latest_active_prefers_newer_then_smaller_id() {
        let repo = MemoryCredentialRepository::new();
        let principal_id = Uuid::new_v4();
        let t1 = Utc::now();
        let t2 = t1 + chrono::Duration::seconds(5);

        let old = repo
            .create_credential(principal_id, HashedPassword::new("h1".into()), t1)
            .await
            .expect("insert");
        let new = repo
            .create_credential(principal_id, HashedPassword::new("h2".into()), t2)
            .await
            .expect("insert");

        let latest = repo
            .find_latest_active(principal_id)
            .await
            .expect("query")
            .expect("credential");
        assert_eq!(latest.id(), new);

        // Same timestamp: the smaller id wins, on every read.
        let tied = repo
            .create_credential(principal_id, HashedPassword::new("h3".into()), t2)
            .await
            .expect("insert");
        let winner = new.min(tied);
        let latest = repo
            .find_latest_active(principal_id)
            .await
            .expect("query")
            .expect("credential");
        assert_eq!(latest.id(), winner);

        let _ = old;
    }

    #[tokio::test]
    async fn deactivate_is_one_way() {
        let repo = MemoryCredentialRepository::new();
        let principal_id = Uuid::new_v4();
        let id = repo
            .create_credential(principal_id, HashedPassword::new("h".into()), Utc::now())
            .await
            .expect("insert");

        let first = Utc::now();
        repo.deactivate(id, first).await.expect("deactivate");

        let again = repo.deactivate(id, first + chrono::Duration::seconds(1)).await;
        assert!(matches!(again, Err(RepositoryError::NotFound)));

        let records = repo.records_for(principal_id);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].deactivate_timestamp(), Some(first));
    }

    #[tokio::test]
    async fn deactivate_unknown_credential_is_not_found() {
        let repo = MemoryCredentialRepository::new();
        let result = repo.deactivate(Uuid::new_v4(), Utc::now()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
