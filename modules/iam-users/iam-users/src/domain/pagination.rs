//! Page requests, page results and authorization-aware listing.
//!
//! The legacy store pages by its own numeric cursor. That cursor is handed
//! out as the decimal continue token and fed back verbatim, so filtering
//! items after the fetch never shifts the position of the next page.

use std::future::Future;

use iam_users_sdk::{ListOptions, RequestContext, User};
use tracing::debug;

use super::error::DomainError;
use super::namespace::NamespaceInfo;
use super::ports::{AccessClient, CheckRequest};
use crate::config::LegacyUsersConfig;

const VERB_GET: &str = "get";

/// Bounded page request sent to the legacy store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    /// Store cursor to resume after, `0` for the start of the collection.
    pub continue_from: i64,
}

impl Pagination {
    /// Builds the store request from caller options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContinueToken` when the token is not a positive
    /// decimal cursor.
    pub fn from_list_options(
        options: &ListOptions,
        config: &LegacyUsersConfig,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            limit: config.effective_limit(options.limit),
            continue_from: parse_continue(&options.continue_token)?,
        })
    }
}

fn parse_continue(token: &str) -> Result<i64, DomainError> {
    if token.is_empty() {
        return Ok(0);
    }
    match token.parse::<i64>() {
        Ok(cursor) if cursor > 0 => Ok(cursor),
        _ => Err(DomainError::InvalidContinueToken(token.to_owned())),
    }
}

/// One page of resources plus the store's version and next cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub rv: i64,
    pub continue_from: i64,
}

/// Name under which a resource is authorized.
pub trait AuthResource {
    fn auth_id(&self) -> &str;
}

impl AuthResource for User {
    fn auth_id(&self) -> &str {
        &self.metadata.name
    }
}

/// Group and resource name used in access checks.
#[derive(Debug, Clone, Copy)]
pub struct GroupResource<'a> {
    pub group: &'a str,
    pub resource: &'a str,
}

/// Fetches one page through `fetch` and drops the items the caller may not
/// read.
///
/// Items keep the order `fetch` returned them in. `rv` and `continue_from`
/// are passed through untouched, so a page can come back shorter than the
/// limit (even empty) while the listing still has more to offer.
///
/// # Errors
///
/// Returns the error of `fetch` or of the access checker unchanged.
pub async fn list_authorized<T, F, Fut>(
    ctx: &RequestContext,
    access: &dyn AccessClient,
    target: GroupResource<'_>,
    ns: &NamespaceInfo,
    pagination: Pagination,
    fetch: F,
) -> Result<ListResponse<T>, DomainError>
where
    T: AuthResource,
    F: FnOnce(Pagination) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>, DomainError>>,
{
    let page = fetch(pagination).await?;
    let fetched = page.items.len();

    let mut allowed = Vec::with_capacity(fetched);
    for item in page.items {
        let req = CheckRequest {
            namespace: ns.value.clone(),
            group: target.group.to_owned(),
            resource: target.resource.to_owned(),
            verb: VERB_GET.to_owned(),
            name: item.auth_id().to_owned(),
        };
        if access
            .check(ctx, &req)
            .await
            .map_err(DomainError::Authorization)?
        {
            allowed.push(item);
        }
    }

    debug!(
        fetched,
        allowed = allowed.len(),
        "filtered page by access checks"
    );

    Ok(ListResponse {
        items: allowed,
        rv: page.rv,
        continue_from: page.continue_from,
    })
}

/// Decimal text for non-zero values, `""` for zero.
///
/// Zero means "unset" for both versions and cursors and must not be
/// confused with the epoch or a real position.
#[must_use]
pub fn optional_format_int(v: i64) -> String {
    if v == 0 { String::new() } else { v.to_string() }
}
