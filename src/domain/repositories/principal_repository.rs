use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{error::RepositoryError, models::principal::Principal};

/// Store contract for principals, implemented by the external identity store.
///
/// The associated types keep the engine generic over the deployment's
/// principal shape; the engine only touches the `Principal` capability
/// surface.
#[async_trait]
pub trait PrincipalRepository {
    type Principal: Principal + Send + Sync;
    type NewPrincipal: Send;

    /// Create a principal and return its generated id. The store enforces
    /// login uniqueness and reports collisions as `RepositoryError::Duplicate`.
    async fn create_principal(
        &self,
        attrs: Self::NewPrincipal,
    ) -> Result<Uuid, RepositoryError>;

    /// Look up a principal whose status is active by its login attribute.
    async fn find_active_by_login(
        &self,
        login: &str,
    ) -> Result<Option<Self::Principal>, RepositoryError>;
}
