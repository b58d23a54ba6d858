use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value object representing a hashed password
///
/// Wraps the PHC-format string produced by the hash service. The plaintext it
/// was derived from is never stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One stored password record for a principal.
///
/// Records are append-only history: a rotation inserts a new record and leaves
/// the old ones in place. The only permitted mutation is the one-way
/// deactivation transition.
#[derive(Debug, Clone)]
pub struct Credential {
    id: Uuid,
    principal_id: Uuid,
    password_hash: HashedPassword,
    create_timestamp: DateTime<Utc>,
    deactivate_timestamp: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(
        id: Uuid,
        principal_id: Uuid,
        password_hash: HashedPassword,
        create_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            principal_id,
            password_hash,
            create_timestamp,
            deactivate_timestamp: None,
        }
    }

    pub fn reconstruct(
        id: Uuid,
        principal_id: Uuid,
        password_hash: HashedPassword,
        create_timestamp: DateTime<Utc>,
        deactivate_timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            principal_id,
            password_hash,
            create_timestamp,
            deactivate_timestamp,
        }
    }

    /// A credential is active while its deactivation timestamp is unset.
    pub fn is_active(&self) -> bool {
        self.deactivate_timestamp.is_none()
    }

    /// Mark the credential deactivated. The timestamp is set once; later
    /// calls leave the original deactivation time in place.
    pub fn deactivate(&mut self, at: DateTime<Utc>) {
        self.deactivate_timestamp.get_or_insert(at);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn principal_id(&self) -> Uuid {
        self.principal_id
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn create_timestamp(&self) -> DateTime<Utc> {
        self.create_timestamp
    }

    pub fn deactivate_timestamp(&self) -> Option<DateTime<Utc>> {
        self.deactivate_timestamp
    }
}
