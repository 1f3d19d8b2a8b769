//! Collaborators consumed by the users storage.
//!
//! Only the calls this module makes are modelled here; the real legacy store
//! and access checker expose far more.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use iam_users_sdk::RequestContext;

use super::namespace::NamespaceInfo;
use super::pagination::Pagination;

/// A row of the legacy `user` table.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyUser {
    /// Numeric primary key, also the pagination cursor of the store.
    pub id: i64,
    pub uid: String,
    pub org_id: i64,
    pub name: String,
    pub login: String,
    pub email: String,
    pub email_verified: bool,
    pub is_disabled: bool,
    pub is_admin: bool,
    pub is_provisioned: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// `None` or the Unix epoch when the user never signed in.
    pub last_seen_at: Option<DateTime<Utc>>,
}

/// Query sent to the legacy store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUserQuery {
    /// Organization filter, `0` lets the store use the namespace org.
    pub org_id: i64,
    /// Exact UID filter, `None` for all users.
    pub uid: Option<String>,
    pub pagination: Pagination,
}

/// One page returned by the legacy store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUserResult {
    pub users: Vec<LegacyUser>,
    /// Version of the collection, `0` when the store does not know it.
    pub rv: i64,
    /// Cursor of the next page, `0` when the listing is exhausted.
    pub continue_from: i64,
}

/// Read access to the legacy identity store.
#[async_trait]
pub trait LegacyIdentityStore: Send + Sync {
    /// Returns one page of users of the namespace's organization, ordered by
    /// the store's own cursor.
    async fn list_users(
        &self,
        ctx: &RequestContext,
        ns: &NamespaceInfo,
        query: ListUserQuery,
    ) -> anyhow::Result<ListUserResult>;
}

/// A single authorization question: may the caller perform `verb` on the
/// named resource in `namespace`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub namespace: String,
    pub group: String,
    pub resource: String,
    pub verb: String,
    pub name: String,
}

/// Authorization decision point.
#[async_trait]
pub trait AccessClient: Send + Sync {
    /// Returns `Ok(false)` for a denial; `Err` only when no decision could be
    /// made.
    async fn check(&self, ctx: &RequestContext, req: &CheckRequest) -> anyhow::Result<bool>;
}
