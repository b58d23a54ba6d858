//! Database entities for the IAM tables.
//!
//! The tables themselves are provisioned by the deployment's migration
//! tooling; these models only describe the schema the repositories run
//! against.

pub mod iam_passwords;
pub mod iam_principals;
