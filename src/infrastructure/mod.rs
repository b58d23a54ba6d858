pub mod argon2_password_hasher;
pub mod credential_repository;
#[cfg(test)]
pub mod memory_repository;
pub mod principal_repository;
