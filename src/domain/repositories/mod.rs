pub mod credential_repository;
pub mod principal_repository;
