//! Configuration for the IAM users module.

use serde::Deserialize;

/// Configuration for the IAM users module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LegacyUsersConfig {
    /// Page size used when the caller asks for none (limit < 1).
    /// Default: 50
    pub default_page_size: i64,

    /// Upper bound applied to requested page sizes.
    /// Default: 1000
    pub max_page_size: i64,

    /// API group of the `users` resource.
    /// Default: `iam.grafana.app`
    pub group: String,

    /// API version served by this storage.
    /// Default: `v0alpha1`
    pub version: String,
}

impl Default for LegacyUsersConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 1000,
            group: "iam.grafana.app".to_owned(),
            version: "v0alpha1".to_owned(),
        }
    }
}

impl LegacyUsersConfig {
    /// Resolves the page size to send to the legacy store.
    #[must_use]
    pub fn effective_limit(&self, requested: i64) -> i64 {
        if requested < 1 {
            self.default_page_size
        } else {
            requested.min(self.max_page_size)
        }
    }
}
