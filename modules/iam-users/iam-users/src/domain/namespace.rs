//! Namespace to organization mapping.
//!
//! Legacy rows are keyed by organization id, resources by namespace string.
//! `default` is organization 1, `org-<n>` is organization `n`, and
//! `stacks-<n>` is a hosted stack whose single organization is 1.

use iam_users_sdk::RequestContext;

use super::error::DomainError;

const DEFAULT_NAMESPACE: &str = "default";
const ORG_PREFIX: &str = "org-";
const STACK_PREFIX: &str = "stacks-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceInfo {
    /// Namespace as it appears on resources.
    pub value: String,
    pub org_id: i64,
    /// Non-zero only for `stacks-<n>` namespaces.
    pub stack_id: i64,
}

impl NamespaceInfo {
    /// Parses a namespace string.
    ///
    /// # Errors
    ///
    /// Returns `ScopeResolution` for empty or unrecognised namespaces.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::scope_resolution("namespace is required"));
        }
        if value == DEFAULT_NAMESPACE {
            return Ok(Self::new(value, 1, 0));
        }
        if let Some(rest) = value.strip_prefix(ORG_PREFIX) {
            let org_id = parse_positive(value, rest)?;
            return Ok(Self::new(value, org_id, 0));
        }
        if let Some(rest) = value.strip_prefix(STACK_PREFIX) {
            let stack_id = parse_positive(value, rest)?;
            return Ok(Self::new(value, 1, stack_id));
        }
        Err(DomainError::scope_resolution(format!(
            "unsupported namespace \"{value}\""
        )))
    }

    /// Resolves the namespace of a request.
    ///
    /// # Errors
    ///
    /// Returns `ScopeResolution` when the context has no namespace or it
    /// cannot be parsed.
    pub fn from_context(ctx: &RequestContext) -> Result<Self, DomainError> {
        let value = ctx
            .namespace()
            .ok_or_else(|| DomainError::scope_resolution("namespace is required"))?;
        Self::parse(value)
    }

    fn new(value: &str, org_id: i64, stack_id: i64) -> Self {
        Self {
            value: value.to_owned(),
            org_id,
            stack_id,
        }
    }
}

fn parse_positive(namespace: &str, digits: &str) -> Result<i64, DomainError> {
    match digits.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::scope_resolution(format!(
            "invalid id in namespace \"{namespace}\""
        ))),
    }
}
