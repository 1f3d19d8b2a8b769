//! IAM Users SDK
//!
//! This crate provides the public contract of the `iam-users` module:
//! - [`UsersStorageApi`] - the read surface exposed to the resource server
//! - [`User`], [`UserList`], [`ObjectMeta`] - canonical resource models
//! - [`RequestContext`] - per-call namespace, identity and cancellation
//! - [`UsersError`] - error taxonomy seen by callers
//!
//! ## Usage
//!
//! ```ignore
//! use iam_users_sdk::{ListOptions, RequestContext, UsersStorageApi};
//!
//! let ctx = RequestContext::builder().namespace("org-2").build();
//! let page = users.list(&ctx, &ListOptions::with_limit(100)).await?;
//!
//! let next = users
//!     .list(&ctx, &ListOptions::with_limit(100).continue_from(&page.metadata.continue_token))
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod context;
pub mod error;
pub mod models;

pub use api::UsersStorageApi;
pub use context::{RequestContext, RequestContextBuilder};
pub use error::UsersError;
pub use models::{
    GetOptions, ListMeta, ListOptions, ObjectMeta, Table, TableColumnDefinition, TableInput,
    TableRow, User, UserList, UserSpec,
};

/// Annotation holding the last time the user was seen, RFC-3339 UTC.
pub const ANNO_KEY_LAST_SEEN_AT: &str = "iam.grafana.app/lastSeenAt";

/// Annotation holding the timestamp the resource version is derived from.
pub const ANNO_KEY_UPDATED_TIMESTAMP: &str = "grafana.app/updatedTimestamp";

/// Label carrying the numeric id of the legacy row.
///
/// Kept for consumers that still address users by their legacy id.
pub const LABEL_KEY_DEPRECATED_INTERNAL_ID: &str = "grafana.app/deprecatedInternalID";
