//! In-memory legacy identity store.
//!
//! Behaves like the SQL-backed store as far as the read path can observe:
//! rows are ordered by numeric id, the cursor is the last id of a page, and
//! the collection version is the newest update time of the organization.

use async_trait::async_trait;
use iam_users_sdk::RequestContext;
use parking_lot::RwLock;

use crate::domain::namespace::NamespaceInfo;
use crate::domain::ports::{LegacyIdentityStore, LegacyUser, ListUserQuery, ListUserResult};

#[derive(Default)]
pub struct InMemoryIdentityStore {
    /// Sorted by `id`.
    users: RwLock<Vec<LegacyUser>>,
}

impl InMemoryIdentityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = LegacyUser>) -> Self {
        let store = Self::new();
        for user in users {
            store.upsert(user);
        }
        store
    }

    /// Inserts a row or replaces the row with the same id.
    pub fn upsert(&self, user: LegacyUser) {
        let mut users = self.users.write();
        match users.binary_search_by_key(&user.id, |u| u.id) {
            Ok(pos) => users[pos] = user,
            Err(pos) => users.insert(pos, user),
        }
    }

    /// Removes the row with `id`, returning whether it existed.
    pub fn remove(&self, id: i64) -> bool {
        let mut users = self.users.write();
        match users.binary_search_by_key(&id, |u| u.id) {
            Ok(pos) => {
                users.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl LegacyIdentityStore for InMemoryIdentityStore {
    async fn list_users(
        &self,
        ctx: &RequestContext,
        ns: &NamespaceInfo,
        query: ListUserQuery,
    ) -> anyhow::Result<ListUserResult> {
        if ctx.is_cancelled() {
            anyhow::bail!("query cancelled");
        }
        if query.pagination.limit < 1 {
            anyhow::bail!("limit must be positive, got {}", query.pagination.limit);
        }
        let limit = usize::try_from(query.pagination.limit)?;
        let org_id = if query.org_id == 0 {
            ns.org_id
        } else {
            query.org_id
        };

        let users = self.users.read();
        let in_org: Vec<&LegacyUser> = users.iter().filter(|u| u.org_id == org_id).collect();

        let mut page: Vec<LegacyUser> = in_org
            .iter()
            .filter(|u| query.uid.as_ref().is_none_or(|uid| &u.uid == uid))
            .filter(|u| u.id > query.pagination.continue_from)
            .take(limit.saturating_add(1))
            .map(|u| (*u).clone())
            .collect();

        let continue_from = if page.len() > limit {
            page.truncate(limit);
            page.last().map_or(0, |u| u.id)
        } else {
            0
        };

        let rv = in_org
            .iter()
            .map(|u| u.updated.timestamp_millis())
            .max()
            .unwrap_or_default();

        Ok(ListUserResult {
            users: page,
            rv,
            continue_from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::Pagination;
    use chrono::{TimeZone, Utc};

    fn row(id: i64, org_id: i64) -> LegacyUser {
        LegacyUser {
            id,
            uid: format!("u-{id}"),
            org_id,
            name: format!("User {id}"),
            login: format!("user{id}"),
            email: format!("user{id}@example.com"),
            email_verified: false,
            is_disabled: false,
            is_admin: false,
            is_provisioned: false,
            created: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            updated: Utc.timestamp_millis_opt(1_700_000_000_000 + id).unwrap(),
            last_seen_at: None,
        }
    }

    fn query(limit: i64, continue_from: i64) -> ListUserQuery {
        ListUserQuery {
            org_id: 0,
            uid: None,
            pagination: Pagination {
                limit,
                continue_from,
            },
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::builder().namespace("default").build()
    }

    fn default_ns() -> NamespaceInfo {
        NamespaceInfo::parse("default").unwrap()
    }

    #[tokio::test]
    async fn test_pages_by_id_cursor() {
        let store = InMemoryIdentityStore::with_users([row(3, 1), row(1, 1), row(2, 1)]);

        let first = store
            .list_users(&ctx(), &default_ns(), query(2, 0))
            .await
            .unwrap();
        let ids: Vec<_> = first.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(first.continue_from, 2);

        let second = store
            .list_users(&ctx(), &default_ns(), query(2, first.continue_from))
            .await
            .unwrap();
        let ids: Vec<_> = second.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(second.continue_from, 0);
    }

    #[tokio::test]
    async fn test_exact_page_has_no_continue() {
        let store = InMemoryIdentityStore::with_users([row(1, 1), row(2, 1)]);
        let res = store
            .list_users(&ctx(), &default_ns(), query(2, 0))
            .await
            .unwrap();
        assert_eq!(res.users.len(), 2);
        assert_eq!(res.continue_from, 0);
    }

    #[tokio::test]
    async fn test_scoped_to_org_and_uid() {
        let store = InMemoryIdentityStore::with_users([row(1, 1), row(2, 2), row(3, 1)]);
        let ns = NamespaceInfo::parse("org-2").unwrap();

        let res = store.list_users(&ctx(), &ns, query(10, 0)).await.unwrap();
        assert_eq!(res.users.len(), 1);
        assert_eq!(res.users[0].id, 2);
        assert_eq!(res.rv, 1_700_000_000_002);

        let mut by_uid = query(1, 0);
        by_uid.uid = Some("u-3".to_owned());
        let res = store
            .list_users(&ctx(), &default_ns(), by_uid)
            .await
            .unwrap();
        assert_eq!(res.users.len(), 1);
        assert_eq!(res.users[0].uid, "u-3");
    }

    #[tokio::test]
    async fn test_empty_org_has_zero_version() {
        let store = InMemoryIdentityStore::new();
        let res = store
            .list_users(&ctx(), &default_ns(), query(10, 0))
            .await
            .unwrap();
        assert!(res.users.is_empty());
        assert_eq!(res.rv, 0);
        assert_eq!(res.continue_from, 0);
    }

    #[tokio::test]
    async fn test_cancelled_context_fails() {
        let store = InMemoryIdentityStore::with_users([row(1, 1)]);
        let ctx = ctx();
        ctx.cancellation().cancel();

        let err = store
            .list_users(&ctx, &default_ns(), query(10, 0))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "query cancelled");
    }

    #[tokio::test]
    async fn test_non_positive_limit_rejected() {
        let store = InMemoryIdentityStore::new();
        let res = store.list_users(&ctx(), &default_ns(), query(0, 0)).await;
        assert!(res.is_err());
    }

    #[test]
    fn test_upsert_and_remove() {
        let store = InMemoryIdentityStore::with_users([row(1, 1)]);
        let mut changed = row(1, 1);
        changed.login = "renamed".to_owned();
        store.upsert(changed);
        assert_eq!(store.len(), 1);

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert!(store.is_empty());
    }
}
