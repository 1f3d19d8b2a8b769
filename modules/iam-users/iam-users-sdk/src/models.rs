//! Public models for the `iam-users` module.
//!
//! These follow the resource-server object shape: every resource carries an
//! [`ObjectMeta`] with name, namespace and version, and lists carry a
//! [`ListMeta`] with the collection version and the continue token.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata shared by every namespaced resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Opaque version stamp. For users this is the last update time in
    /// Unix milliseconds, rendered as decimal text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Returns the annotation value, or `""` when it is not set.
    #[must_use]
    pub fn annotation(&self, key: &str) -> &str {
        self.annotations.get(key).map_or("", String::as_str)
    }

    /// Returns the label value, or `""` when it is not set.
    #[must_use]
    pub fn label(&self, key: &str) -> &str {
        self.labels.get(key).map_or("", String::as_str)
    }
}

/// Metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Version of the underlying collection, `""` when unknown.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    /// Token to pass back to fetch the next page, `""` when exhausted.
    #[serde(
        rename = "continue",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub continue_token: String,
}

/// User attributes mirrored from the legacy account row.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpec {
    /// Display name.
    pub name: String,
    pub login: String,
    pub email: String,
    pub email_verified: bool,
    pub disabled: bool,
    /// Server-wide administrator flag.
    pub grafana_admin: bool,
    /// Whether the account is managed by an external provisioning source.
    pub provisioned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub metadata: ObjectMeta,
    pub spec: UserSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub metadata: ListMeta,
    pub items: Vec<User>,
}

/// Options of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Requested page size. Values below 1 select the configured default.
    pub limit: i64,
    /// Continue token returned by the previous page, empty for the first one.
    pub continue_token: String,
}

impl ListOptions {
    #[must_use]
    pub fn with_limit(limit: i64) -> Self {
        Self {
            limit,
            continue_token: String::new(),
        }
    }

    #[must_use]
    pub fn continue_from(mut self, token: impl Into<String>) -> Self {
        self.continue_token = token.into();
        self
    }
}

/// Options of a get call. Legacy users are always read at their latest state,
/// so the requested version is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    pub resource_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<serde_json::Value>,
    pub object: ObjectMeta,
}

/// Tabular rendering of a resource or a list, used by CLI style clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub metadata: ListMeta,
    pub column_definitions: Vec<TableColumnDefinition>,
    pub rows: Vec<TableRow>,
}

/// What a table conversion is asked to render.
#[derive(Debug, Clone, Copy)]
pub enum TableInput<'a> {
    Item(&'a User),
    List(&'a UserList),
}
