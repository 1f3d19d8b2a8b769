//! Wiring of the IAM users module.

use std::sync::Arc;

use iam_users_sdk::UsersStorageApi;
use tracing::{debug, info};

use crate::config::LegacyUsersConfig;
use crate::domain::ports::{AccessClient, LegacyIdentityStore};
use crate::domain::resource::ResourceInfo;
use crate::domain::service::LegacyUserService;
use crate::local_client::LegacyUsersLocalClient;

/// IAM users module.
///
/// Serves the `users` resource (read-only) from the legacy identity store.
/// The host supplies the store and the access client; the module hands back
/// the storage the resource server dispatches to.
pub struct LegacyUsersModule {
    service: Arc<LegacyUserService>,
}

impl LegacyUsersModule {
    /// Builds the module from its raw configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be parsed or the page
    /// size bounds are inconsistent.
    pub fn init(
        raw_config: Option<serde_json::Value>,
        store: Arc<dyn LegacyIdentityStore>,
        access: Arc<dyn AccessClient>,
    ) -> anyhow::Result<Self> {
        info!("Initializing iam_users module");

        let cfg: LegacyUsersConfig = match raw_config {
            Some(raw) => serde_json::from_value(raw)?,
            None => LegacyUsersConfig::default(),
        };
        debug!(
            "Loaded iam_users config: default_page_size={}, max_page_size={}, group={}, version={}",
            cfg.default_page_size, cfg.max_page_size, cfg.group, cfg.version
        );
        if cfg.default_page_size < 1 || cfg.max_page_size < cfg.default_page_size {
            anyhow::bail!(
                "invalid page sizes: default_page_size={}, max_page_size={}",
                cfg.default_page_size,
                cfg.max_page_size
            );
        }

        let resource = ResourceInfo::users(&cfg.group, &cfg.version);
        let api_version = resource.api_version();
        let service = Arc::new(LegacyUserService::new(store, access, resource, cfg));

        info!(%api_version, "iam_users module initialized");
        Ok(Self { service })
    }

    #[must_use]
    pub fn service(&self) -> Arc<LegacyUserService> {
        Arc::clone(&self.service)
    }

    /// Storage to register with the resource server.
    #[must_use]
    pub fn client(&self) -> Arc<dyn UsersStorageApi> {
        Arc::new(LegacyUsersLocalClient::new(self.service()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{AllowAllAccessClient, InMemoryIdentityStore};
    use serde_json::json;

    fn collaborators() -> (Arc<dyn LegacyIdentityStore>, Arc<dyn AccessClient>) {
        (
            Arc::new(InMemoryIdentityStore::new()),
            Arc::new(AllowAllAccessClient),
        )
    }

    #[test]
    fn test_init_with_defaults() {
        let (store, access) = collaborators();
        let module = LegacyUsersModule::init(None, store, access).unwrap();
        let client = module.client();

        assert!(client.namespace_scoped());
        assert_eq!(client.singular_name(), "user");
        assert_eq!(module.service().resource().group_resource(), "users.iam.grafana.app");
    }

    #[test]
    fn test_init_with_custom_group() {
        let (store, access) = collaborators();
        let module = LegacyUsersModule::init(
            Some(json!({ "group": "iam.example.dev", "version": "v1" })),
            store,
            access,
        )
        .unwrap();

        let resource = module.service().resource().clone();
        assert_eq!(resource.api_version(), "iam.example.dev/v1");
    }

    #[test]
    fn test_init_rejects_inconsistent_page_sizes() {
        let (store, access) = collaborators();
        let res = LegacyUsersModule::init(
            Some(json!({ "default_page_size": 100, "max_page_size": 10 })),
            store,
            access,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_init_rejects_unknown_keys() {
        let (store, access) = collaborators();
        let res = LegacyUsersModule::init(Some(json!({ "page": 1 })), store, access);
        assert!(res.is_err());
    }
}
