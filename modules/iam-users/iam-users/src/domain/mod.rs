//! Domain layer of the IAM users module.
//!
//! Projection of legacy rows, pagination with access filtering, and the
//! collaborator traits the read path depends on.

pub mod error;
pub mod meta;
pub mod namespace;
pub mod pagination;
pub mod ports;
pub mod projector;
pub mod resource;
pub mod service;

pub use error::DomainError;
pub use namespace::NamespaceInfo;
pub use ports::{
    AccessClient, CheckRequest, LegacyIdentityStore, LegacyUser, ListUserQuery, ListUserResult,
};
pub use service::LegacyUserService;
