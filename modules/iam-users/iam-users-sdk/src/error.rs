//! Error types for the `iam-users` SDK.

use thiserror::Error;

/// Errors returned by the [`UsersStorageApi`](crate::UsersStorageApi).
///
/// Denied items never surface here: a list silently omits what the caller
/// cannot read, and a single-item lookup reports `NotFound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersError {
    /// The namespace could not be resolved from the request.
    #[error("invalid namespace: {0}")]
    ScopeResolution(String),

    /// The request was malformed (e.g. an unparseable continue token).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested resource does not exist or cannot be read.
    #[error("{resource} \"{name}\" not found")]
    NotFound { resource: String, name: String },

    /// A collaborator failed; the message is passed through as reported.
    #[error("{0}")]
    Internal(String),
}

impl UsersError {
    #[must_use]
    pub fn scope_resolution(message: impl Into<String>) -> Self {
        Self::ScopeResolution(message.into())
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    #[must_use]
    pub fn not_found(resource: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn is_scope_resolution(&self) -> bool {
        matches!(self, Self::ScopeResolution(_))
    }

    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
