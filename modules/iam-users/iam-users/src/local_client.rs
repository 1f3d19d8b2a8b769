//! Local client implementing the `UsersStorageApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use iam_users_sdk::{
    GetOptions, ListOptions, RequestContext, Table, TableInput, User, UserList, UsersError,
    UsersStorageApi,
};

use crate::domain::service::LegacyUserService;

/// Local client for the IAM users module.
///
/// Delegates to the domain service and maps domain errors onto the SDK
/// error taxonomy.
pub struct LegacyUsersLocalClient {
    service: Arc<LegacyUserService>,
}

impl LegacyUsersLocalClient {
    #[must_use]
    pub fn new(service: Arc<LegacyUserService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersStorageApi for LegacyUsersLocalClient {
    async fn list(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> Result<UserList, UsersError> {
        self.service
            .list(ctx, options)
            .await
            .map_err(UsersError::from)
    }

    async fn get(
        &self,
        ctx: &RequestContext,
        name: &str,
        options: &GetOptions,
    ) -> Result<User, UsersError> {
        self.service
            .get(ctx, name, options)
            .await
            .map_err(UsersError::from)
    }

    fn new_object(&self) -> User {
        self.service.new_object()
    }

    fn new_list(&self) -> UserList {
        self.service.new_list()
    }

    fn namespace_scoped(&self) -> bool {
        self.service.namespace_scoped()
    }

    fn singular_name(&self) -> &str {
        self.service.singular_name()
    }

    fn convert_to_table(&self, input: TableInput<'_>) -> Result<Table, UsersError> {
        self.service
            .convert_to_table(input)
            .map_err(UsersError::from)
    }
}
