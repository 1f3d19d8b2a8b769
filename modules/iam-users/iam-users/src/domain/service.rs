//! Read path of the `users` resource over the legacy identity store.

use std::sync::Arc;

use iam_users_sdk::{
    GetOptions, ListMeta, ListOptions, RequestContext, Table, TableInput, User, UserList,
};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::namespace::NamespaceInfo;
use super::pagination::{
    GroupResource, ListResponse, Pagination, list_authorized, optional_format_int,
};
use super::ports::{AccessClient, LegacyIdentityStore, ListUserQuery};
use super::projector::to_user_item;
use super::resource::ResourceInfo;
use crate::config::LegacyUsersConfig;

/// Serves `list` and `get` for users by translating legacy rows.
///
/// Holds no mutable state; concurrent calls are independent and each one
/// reaches the store exactly once, without retries.
pub struct LegacyUserService {
    store: Arc<dyn LegacyIdentityStore>,
    access: Arc<dyn AccessClient>,
    resource: ResourceInfo,
    config: LegacyUsersConfig,
}

impl LegacyUserService {
    #[must_use]
    pub fn new(
        store: Arc<dyn LegacyIdentityStore>,
        access: Arc<dyn AccessClient>,
        resource: ResourceInfo,
        config: LegacyUsersConfig,
    ) -> Self {
        Self {
            store,
            access,
            resource,
            config,
        }
    }

    /// Lists one page of users visible to the caller.
    ///
    /// # Errors
    ///
    /// Scope and continue-token errors, and any store or access-check error,
    /// unchanged.
    #[instrument(skip_all, fields(namespace = ctx.namespace().unwrap_or_default()))]
    pub async fn list(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> Result<UserList, DomainError> {
        let ns = NamespaceInfo::from_context(ctx)?;
        let pagination = Pagination::from_list_options(options, &self.config)?;
        debug!(
            limit = pagination.limit,
            continue_from = pagination.continue_from,
            "listing users"
        );

        let target = GroupResource {
            group: &self.resource.group,
            resource: &self.resource.resource,
        };
        let res = list_authorized(ctx, self.access.as_ref(), target, &ns, pagination, |p| {
            self.fetch_page(ctx, &ns, p)
        })
        .await?;

        Ok(UserList {
            metadata: ListMeta {
                resource_version: optional_format_int(res.rv),
                continue_token: optional_format_int(res.continue_from),
            },
            items: res.items,
        })
    }

    async fn fetch_page(
        &self,
        ctx: &RequestContext,
        ns: &NamespaceInfo,
        pagination: Pagination,
    ) -> Result<ListResponse<User>, DomainError> {
        let found = self
            .store
            .list_users(
                ctx,
                ns,
                ListUserQuery {
                    org_id: ns.org_id,
                    uid: None,
                    pagination,
                },
            )
            .await
            .map_err(DomainError::Store)?;

        Ok(ListResponse {
            items: found
                .users
                .iter()
                .map(|u| to_user_item(u, &ns.value))
                .collect(),
            rv: found.rv,
            continue_from: found.continue_from,
        })
    }

    /// Gets one user by name.
    ///
    /// Any store failure is reported as `NotFound`, the same as a missing
    /// user, so callers cannot tell the two apart.
    ///
    /// # Errors
    ///
    /// `ScopeResolution` or `NotFound`.
    #[instrument(skip_all, fields(namespace = ctx.namespace().unwrap_or_default(), name = %name))]
    pub async fn get(
        &self,
        ctx: &RequestContext,
        name: &str,
        _options: &GetOptions,
    ) -> Result<User, DomainError> {
        let ns = NamespaceInfo::from_context(ctx)?;

        let query = ListUserQuery {
            org_id: ns.org_id,
            uid: Some(name.to_owned()),
            pagination: Pagination {
                limit: 1,
                continue_from: 0,
            },
        };
        let found = match self.store.list_users(ctx, &ns, query).await {
            Ok(found) => found,
            Err(e) => {
                debug!(error = %e, "user lookup failed, reporting not found");
                return Err(self.resource.new_not_found(name));
            }
        };

        found
            .users
            .first()
            .map(|u| to_user_item(u, &ns.value))
            .ok_or_else(|| self.resource.new_not_found(name))
    }

    #[must_use]
    pub fn new_object(&self) -> User {
        (self.resource.new_fn)()
    }

    #[must_use]
    pub fn new_list(&self) -> UserList {
        (self.resource.new_list_fn)()
    }

    /// Namespace maps to organization.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn namespace_scoped(&self) -> bool {
        true
    }

    #[must_use]
    pub fn singular_name(&self) -> &str {
        &self.resource.singular
    }

    /// # Errors
    ///
    /// Whatever the registered converter reports.
    pub fn convert_to_table(&self, input: TableInput<'_>) -> Result<Table, DomainError> {
        self.resource.table_converter.convert_to_table(input)
    }

    #[must_use]
    pub fn resource(&self) -> &ResourceInfo {
        &self.resource
    }
}
