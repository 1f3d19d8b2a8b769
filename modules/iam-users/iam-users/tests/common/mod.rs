#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for iam-users integration tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use iam_users::domain::{
    AccessClient, LegacyIdentityStore, LegacyUser, ListUserQuery, ListUserResult, NamespaceInfo,
};
use iam_users::infra::{AllowAllAccessClient, InMemoryIdentityStore};
use iam_users::{LegacyUsersModule, LegacyUsersLocalClient};
use iam_users_sdk::{RequestContext, UsersStorageApi};
use parking_lot::Mutex;

pub fn legacy_user(id: i64, org_id: i64) -> LegacyUser {
    LegacyUser {
        id,
        uid: format!("uid-{id:03}"),
        org_id,
        name: format!("User {id}"),
        login: format!("user{id}"),
        email: format!("user{id}@example.com"),
        email_verified: id % 2 == 0,
        is_disabled: false,
        is_admin: id == 1,
        is_provisioned: false,
        created: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
        updated: Utc.timestamp_millis_opt(1_704_067_200_000 + id * 1_000).unwrap(),
        last_seen_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
    }
}

pub fn seeded_store(count: i64, org_id: i64) -> Arc<InMemoryIdentityStore> {
    Arc::new(InMemoryIdentityStore::with_users(
        (1..=count).map(|id| legacy_user(id, org_id)),
    ))
}

pub fn ctx(namespace: &str) -> RequestContext {
    RequestContext::builder().namespace(namespace).build()
}

pub fn client_with(
    store: Arc<dyn LegacyIdentityStore>,
    access: Arc<dyn AccessClient>,
) -> Arc<dyn UsersStorageApi> {
    LegacyUsersModule::init(None, store, access).unwrap().client()
}

pub fn client_for(store: Arc<dyn LegacyIdentityStore>) -> Arc<dyn UsersStorageApi> {
    client_with(store, Arc::new(AllowAllAccessClient))
}

pub fn local_client(store: Arc<dyn LegacyIdentityStore>) -> LegacyUsersLocalClient {
    LegacyUsersLocalClient::new(
        LegacyUsersModule::init(None, store, Arc::new(AllowAllAccessClient))
            .unwrap()
            .service(),
    )
}

/// Store that always fails with the given message.
pub struct FailingStore(pub &'static str);

#[async_trait]
impl LegacyIdentityStore for FailingStore {
    async fn list_users(
        &self,
        _ctx: &RequestContext,
        _ns: &NamespaceInfo,
        _query: ListUserQuery,
    ) -> anyhow::Result<ListUserResult> {
        anyhow::bail!(self.0)
    }
}

/// Store wrapper that records every query it receives.
pub struct RecordingStore {
    inner: Arc<dyn LegacyIdentityStore>,
    pub queries: Mutex<Vec<(String, ListUserQuery)>>,
}

impl RecordingStore {
    pub fn new(inner: Arc<dyn LegacyIdentityStore>) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LegacyIdentityStore for RecordingStore {
    async fn list_users(
        &self,
        ctx: &RequestContext,
        ns: &NamespaceInfo,
        query: ListUserQuery,
    ) -> anyhow::Result<ListUserResult> {
        self.queries.lock().push((ns.value.clone(), query.clone()));
        self.inner.list_users(ctx, ns, query).await
    }
}

/// Store returning a fixed page, whatever the query.
pub struct FixedPageStore(pub ListUserResult);

#[async_trait]
impl LegacyIdentityStore for FixedPageStore {
    async fn list_users(
        &self,
        _ctx: &RequestContext,
        _ns: &NamespaceInfo,
        _query: ListUserQuery,
    ) -> anyhow::Result<ListUserResult> {
        Ok(self.0.clone())
    }
}
