pub mod authentication_service;
pub mod password_service;
