//! Domain error types for the IAM users module.

use iam_users_sdk::UsersError;
use thiserror::Error;

/// Domain-level errors for the IAM users module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The namespace of the request could not be resolved.
    #[error("invalid namespace: {0}")]
    ScopeResolution(String),

    /// The continue token was not one this storage hands out.
    #[error("invalid continue token: \"{0}\"")]
    InvalidContinueToken(String),

    /// The requested resource does not exist (or could not be read).
    #[error("{resource} \"{name}\" not found")]
    NotFound { resource: String, name: String },

    /// The legacy store failed to run a query.
    #[error(transparent)]
    Store(anyhow::Error),

    /// The access checker failed to reach a decision.
    #[error(transparent)]
    Authorization(anyhow::Error),

    /// The table converter could not render the input.
    #[error("table conversion failed: {0}")]
    TableConversion(String),
}

impl DomainError {
    #[must_use]
    pub fn scope_resolution(message: impl Into<String>) -> Self {
        Self::ScopeResolution(message.into())
    }

    #[must_use]
    pub fn not_found(resource: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            name: name.into(),
        }
    }
}

impl From<DomainError> for UsersError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ScopeResolution(msg) => UsersError::scope_resolution(msg),
            e @ DomainError::InvalidContinueToken(_) => UsersError::invalid_request(e.to_string()),
            DomainError::NotFound { resource, name } => UsersError::not_found(resource, name),
            e @ (DomainError::Store(_)
            | DomainError::Authorization(_)
            | DomainError::TableConversion(_)) => UsersError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let err = DomainError::Store(anyhow::anyhow!("connection reset"));
        assert_eq!(err.to_string(), "connection reset");

        let sdk_err: UsersError = err.into();
        assert_eq!(sdk_err, UsersError::internal("connection reset"));
    }

    #[test]
    fn test_not_found_conversion_keeps_name() {
        let err = DomainError::not_found("users.iam.grafana.app", "u-1");
        let sdk_err: UsersError = err.into();
        assert_eq!(sdk_err, UsersError::not_found("users.iam.grafana.app", "u-1"));
    }

    #[test]
    fn test_invalid_continue_maps_to_invalid_request() {
        let err = DomainError::InvalidContinueToken("abc".to_owned());
        assert_eq!(err.to_string(), "invalid continue token: \"abc\"");

        let sdk_err: UsersError = err.into();
        assert!(sdk_err.is_invalid_request());
    }

    #[test]
    fn test_scope_resolution_conversion() {
        let sdk_err: UsersError = DomainError::scope_resolution("missing namespace").into();
        assert!(sdk_err.is_scope_resolution());
        assert_eq!(sdk_err.to_string(), "invalid namespace: missing namespace");
    }
}
