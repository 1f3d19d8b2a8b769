//! Static access clients.

use std::collections::HashSet;

use async_trait::async_trait;
use iam_users_sdk::RequestContext;

use crate::domain::ports::{AccessClient, CheckRequest};

/// Grants every request. For single-tenant deployments where the resource
/// server already restricts who reaches the storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllAccessClient;

#[async_trait]
impl AccessClient for AllowAllAccessClient {
    async fn check(&self, _ctx: &RequestContext, _req: &CheckRequest) -> anyhow::Result<bool> {
        Ok(true)
    }
}

/// Denies a fixed set of `(namespace, name)` pairs and grants the rest.
#[derive(Debug, Default, Clone)]
pub struct StaticAccessClient {
    denied: HashSet<(String, String)>,
}

impl StaticAccessClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deny(mut self, namespace: &str, name: &str) -> Self {
        self.denied
            .insert((namespace.to_owned(), name.to_owned()));
        self
    }
}

#[async_trait]
impl AccessClient for StaticAccessClient {
    async fn check(&self, _ctx: &RequestContext, req: &CheckRequest) -> anyhow::Result<bool> {
        let key = (req.namespace.clone(), req.name.clone());
        Ok(!self.denied.contains(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(namespace: &str, name: &str) -> CheckRequest {
        CheckRequest {
            namespace: namespace.to_owned(),
            group: "iam.grafana.app".to_owned(),
            resource: "users".to_owned(),
            verb: "get".to_owned(),
            name: name.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_allow_all() {
        let ctx = RequestContext::builder().build();
        assert!(
            AllowAllAccessClient
                .check(&ctx, &request("default", "u-1"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_static_denies_only_listed_pairs() {
        let ctx = RequestContext::builder().build();
        let client = StaticAccessClient::new().deny("default", "u-2");

        assert!(client.check(&ctx, &request("default", "u-1")).await.unwrap());
        assert!(!client.check(&ctx, &request("default", "u-2")).await.unwrap());
        assert!(client.check(&ctx, &request("org-2", "u-2")).await.unwrap());
    }
}
