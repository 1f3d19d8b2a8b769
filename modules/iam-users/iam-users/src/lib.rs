//! IAM Users Module
//!
//! Exposes accounts of the legacy user table as namespaced `users`
//! resources. Only the read path lives here: a page of legacy rows is
//! fetched, filtered by the access client and projected onto `User`
//! objects; single users are fetched through the same query with a UID
//! filter.

pub mod config;
pub mod domain;
pub mod infra;
pub mod local_client;
pub mod module;

pub use config::LegacyUsersConfig;
pub use domain::service::LegacyUserService;
pub use local_client::LegacyUsersLocalClient;
pub use module::LegacyUsersModule;
