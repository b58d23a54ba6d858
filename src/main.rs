mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;
mod usecase;

use axum::{Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        credential_repository::PostgresCredentialRepository,
        principal_repository::PostgresPrincipalRepository,
    },
    presentation::handlers::auth_handler::create_auth_router,
    usecase::password_authentication::PasswordAuthentication,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    let principal_repository = PostgresPrincipalRepository::new(db.clone());
    let credential_repository = PostgresCredentialRepository::new(db.clone());
    let password_hasher = Argon2PasswordHasher::new();
    let auth_service = PasswordAuthentication::new(
        principal_repository,
        credential_repository,
        password_hasher,
    );

    let app = Router::new()
        .route("/", get(|| async { "IAM password authentication" }))
        .nest("/api", create_auth_router(auth_service));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!(%addr, "listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
