pub mod credential;
pub mod principal;
