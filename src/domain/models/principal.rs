use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Minimal capability a principal shape must expose to the engine.
///
/// Deployments extend principals with whatever profile fields they need; the
/// engine only ever relies on an identifier and a login attribute.
pub trait Principal {
    fn id(&self) -> Uuid;
    fn login(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalStatus {
    Active,
    Inactive,
}

impl PrincipalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalStatus::Active => "active",
            PrincipalStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for PrincipalStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(PrincipalStatus::Active),
            "inactive" => Ok(PrincipalStatus::Inactive),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Attributes for creating a principal. Passwords are not part of the
/// principal shape; they travel separately to the credential store.
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub login: String,
    pub kind: String,
    pub name: String,
}

impl NewPrincipal {
    pub fn new(login: String, kind: String, name: String) -> Result<Self, DomainError> {
        if login.is_empty() {
            return Err(DomainError::EmptyLogin);
        }
        Ok(Self { login, kind, name })
    }
}

/// The concrete principal shape used by the IAM stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IamPrincipal {
    id: Uuid,
    login: String,
    kind: String,
    name: String,
    status: PrincipalStatus,
    create_timestamp: DateTime<Utc>,
}

impl IamPrincipal {
    pub fn new(
        id: Uuid,
        login: String,
        kind: String,
        name: String,
        status: PrincipalStatus,
        create_timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if login.is_empty() {
            return Err(DomainError::EmptyLogin);
        }
        Ok(Self {
            id,
            login,
            kind,
            name,
            status,
            create_timestamp,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> PrincipalStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == PrincipalStatus::Active
    }

    pub fn create_timestamp(&self) -> DateTime<Utc> {
        self.create_timestamp
    }
}

impl Principal for IamPrincipal {
    fn id(&self) -> Uuid {
        self.id
    }

    fn login(&self) -> &str {
        &self.login
    }
}
