pub mod password_authentication;
