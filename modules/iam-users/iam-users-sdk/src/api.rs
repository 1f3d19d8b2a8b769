//! `UsersStorageApi` trait definition.
//!
//! This is the read surface the resource server dispatches `list` and `get`
//! verbs to, plus the introspection hooks its resource registry needs.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::UsersError;
use crate::models::{GetOptions, ListOptions, Table, TableInput, User, UserList};

/// Storage for the `users` resource backed by the legacy account store.
///
/// ```ignore
/// let ctx = RequestContext::builder().namespace("default").build();
/// let user = storage.get(&ctx, "u-123", &GetOptions::default()).await?;
/// ```
#[async_trait]
pub trait UsersStorageApi: Send + Sync {
    /// List one page of users in the namespace of `ctx`.
    ///
    /// Items the caller may not read are omitted from the page. The returned
    /// continue token still reflects the store position after the page.
    ///
    /// # Errors
    ///
    /// * `ScopeResolution` - the context carries no usable namespace
    /// * `InvalidRequest` - the continue token was not produced by this API
    /// * `Internal` - the legacy store or the access checker failed
    async fn list(&self, ctx: &RequestContext, options: &ListOptions)
    -> Result<UserList, UsersError>;

    /// Get a single user by name (the legacy UID).
    ///
    /// # Errors
    ///
    /// * `ScopeResolution` - the context carries no usable namespace
    /// * `NotFound` - the user is absent or the lookup failed
    async fn get(
        &self,
        ctx: &RequestContext,
        name: &str,
        options: &GetOptions,
    ) -> Result<User, UsersError>;

    /// Empty instance, used by the server to decode request bodies.
    fn new_object(&self) -> User;

    /// Empty list instance.
    fn new_list(&self) -> UserList;

    /// Users live in a namespace, which maps to an organization.
    fn namespace_scoped(&self) -> bool;

    fn singular_name(&self) -> &str;

    /// Render a user or a list of users as a table.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the registered converter rejects the input.
    fn convert_to_table(&self, input: TableInput<'_>) -> Result<Table, UsersError>;
}
