//! Per-call context handed from the resource server to every collaborator.

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// `RequestContext` carries what the resource server knows about one call:
/// the namespace it targets, who is calling, and the cancellation signal.
///
/// The adapter never inspects the token itself; it hands the same context to
/// every collaborator so that they can stop work when the caller goes away.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    namespace: Option<String>,
    subject_id: Uuid,
    cancellation: CancellationToken,
}

impl RequestContext {
    /// Create a new `RequestContext` builder
    #[must_use]
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }

    /// Namespace requested by the caller, if the route carried one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Subject (user or service) on whose behalf the call is made.
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

#[derive(Default)]
pub struct RequestContextBuilder {
    namespace: Option<String>,
    subject_id: Option<Uuid>,
    cancellation: Option<CancellationToken>,
}

impl RequestContextBuilder {
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    #[must_use]
    pub fn build(self) -> RequestContext {
        RequestContext {
            namespace: self.namespace,
            subject_id: self.subject_id.unwrap_or_default(),
            cancellation: self.cancellation.unwrap_or_default(),
        }
    }
}
