use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        models::principal::{NewPrincipal, Principal},
        repositories::{
            credential_repository::CredentialRepository, principal_repository::PrincipalRepository,
        },
        services::password_service::PasswordHasher,
    },
    usecase::password_authentication::PasswordAuthentication,
};

// Request

/// json for login request
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub password: String,
}

// Response

/// json for login response
#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub principal: PrincipalInfo,
}

/// json for register response
#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
}

#[derive(Serialize, Deserialize)]
pub struct PrincipalInfo {
    pub id: String,
    pub login: String,
}

impl PrincipalInfo {
    fn from_principal(principal: &impl Principal) -> Self {
        Self {
            id: principal.id().to_string(),
            login: principal.login().to_string(),
        }
    }
}

/* Router Function and Handler Function */

// Auth Router

/// function return Router object
/// Suppose to be nested by main router
pub fn create_auth_router<
    P: PrincipalRepository<NewPrincipal = NewPrincipal> + Send + Sync + 'static + Clone,
    C: CredentialRepository + Send + Sync + 'static + Clone,
    H: PasswordHasher + Send + Sync + 'static,
>(
    auth_service: PasswordAuthentication<P, C, H>,
) -> Router {
    let state = AppState {
        auth_service: Arc::new(auth_service),
    };

    Router::new()
        .route("/login", post(login::<P, C, H>))
        .route("/register", post(register::<P, C, H>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<P: PrincipalRepository, C: CredentialRepository, H: PasswordHasher> {
    pub auth_service: Arc<PasswordAuthentication<P, C, H>>,
}

// handler function

/// handler function for login
///
/// Every mismatch cause answers with the same 401 body; only infrastructure
/// and hashing failures become a 500.
async fn login<
    P: PrincipalRepository + Send + Sync,
    C: CredentialRepository + Send + Sync,
    H: PasswordHasher + Send + Sync + 'static,
>(
    State(state): State<AppState<P, C, H>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    match state
        .auth_service
        .authenticate(&payload.login, &payload.password)
        .await
    {
        Ok(Some(principal)) => {
            let response = LoginResponse {
                principal: PrincipalInfo::from_principal(&principal),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (StatusCode::UNAUTHORIZED, Json("Authentication failed")).into_response(),
        Err(error) => {
            tracing::error!(%error, "login handler failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Json("Internal error")).into_response()
        }
    }
}

/// handler function for register
async fn register<
    P: PrincipalRepository<NewPrincipal = NewPrincipal> + Send + Sync,
    C: CredentialRepository + Send + Sync,
    H: PasswordHasher + Send + Sync + 'static,
>(
    State(state): State<AppState<P, C, H>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let attrs = match NewPrincipal::new(payload.login, payload.kind, payload.name) {
        Ok(attrs) => attrs,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Json("Registration failed")).into_response();
        }
    };

    match state
        .auth_service
        .create_principal(attrs, &payload.password)
        .await
    {
        Ok(id) => {
            let response = RegisterResponse { id: id.to_string() };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(DomainError::EmptyPassword) => {
            (StatusCode::BAD_REQUEST, Json("Registration failed")).into_response()
        }
        Err(DomainError::Repository(RepositoryError::Duplicate(_))) => {
            (StatusCode::CONFLICT, Json("Login already taken")).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "register handler failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Json("Internal error")).into_response()
        }
    }
}
