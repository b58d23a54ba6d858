use async_trait::async_trait;

use crate::domain::{error::DomainError, models::principal::Principal};

/// Authentication interface implemented by concrete engines.
///
/// Password authentication is one implementation; other factors plug in as
/// further implementations injected at wiring time.
#[async_trait]
pub trait AuthenticationEngine: Send + Sync {
    type Principal: Principal;

    /// Resolve credentials to the authenticated principal.
    ///
    /// `Ok(None)` is the uniform answer for every mismatch cause; errors are
    /// reserved for infrastructure and hashing failures.
    async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<Self::Principal>, DomainError>;
}
