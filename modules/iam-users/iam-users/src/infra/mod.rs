//! Infrastructure layer: collaborator implementations for local runs.

pub mod access;
pub mod storage;

pub use access::{AllowAllAccessClient, StaticAccessClient};
pub use storage::InMemoryIdentityStore;
