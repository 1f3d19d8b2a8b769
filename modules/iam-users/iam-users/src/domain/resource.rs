//! Registration descriptor of the `users` resource.
//!
//! The resource server owns naming, empty-instance construction and table
//! rendering; this module only supplies them as plain function pointers and
//! a converter object.

use std::fmt;
use std::sync::Arc;

use iam_users_sdk::{
    ListMeta, Table, TableColumnDefinition, TableInput, TableRow, User, UserList,
};
use serde_json::Value;

use super::error::DomainError;
use super::meta::format_rfc3339;

/// Renders resources as tables.
pub trait TableConverter: Send + Sync {
    /// # Errors
    ///
    /// Returns `TableConversion` when the input cannot be rendered.
    fn convert_to_table(&self, input: TableInput<'_>) -> Result<Table, DomainError>;
}

/// Column definition plus the reader producing its cell.
#[derive(Clone)]
pub struct TableColumn {
    pub definition: TableColumnDefinition,
    pub read: fn(&User) -> Value,
}

impl TableColumn {
    #[must_use]
    pub fn new(name: &str, column_type: &str, format: &str, read: fn(&User) -> Value) -> Self {
        Self {
            definition: TableColumnDefinition {
                name: name.to_owned(),
                column_type: column_type.to_owned(),
                format: format.to_owned(),
                description: String::new(),
            },
            read,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.definition.description = description.to_owned();
        self
    }
}

/// Table converter driven by a fixed column list.
pub struct ColumnTableConverter {
    columns: Vec<TableColumn>,
}

impl ColumnTableConverter {
    #[must_use]
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self { columns }
    }

    /// Name, login, email and creation time.
    #[must_use]
    pub fn users() -> Self {
        Self::new(vec![
            TableColumn::new("Name", "string", "name", |u| {
                Value::from(u.metadata.name.as_str())
            }),
            TableColumn::new("Login", "string", "string", |u| {
                Value::from(u.spec.login.as_str())
            })
            .with_description("The user login"),
            TableColumn::new("Email", "string", "string", |u| {
                Value::from(u.spec.email.as_str())
            })
            .with_description("The user email"),
            TableColumn::new("Created At", "date", "", |u| {
                Value::from(
                    u.metadata
                        .creation_timestamp
                        .as_ref()
                        .map(format_rfc3339)
                        .unwrap_or_default(),
                )
            }),
        ])
    }

    fn row(&self, user: &User) -> TableRow {
        TableRow {
            cells: self.columns.iter().map(|c| (c.read)(user)).collect(),
            object: user.metadata.clone(),
        }
    }
}

impl TableConverter for ColumnTableConverter {
    fn convert_to_table(&self, input: TableInput<'_>) -> Result<Table, DomainError> {
        if self.columns.is_empty() {
            return Err(DomainError::TableConversion(
                "no columns registered".to_owned(),
            ));
        }
        let (metadata, rows) = match input {
            TableInput::Item(user) => (
                ListMeta {
                    resource_version: user.metadata.resource_version.clone(),
                    continue_token: String::new(),
                },
                vec![self.row(user)],
            ),
            TableInput::List(list) => (
                list.metadata.clone(),
                list.items.iter().map(|u| self.row(u)).collect(),
            ),
        };
        Ok(Table {
            metadata,
            column_definitions: self.columns.iter().map(|c| c.definition.clone()).collect(),
            rows,
        })
    }
}

/// Everything the resource registry knows about `users`.
#[derive(Clone)]
pub struct ResourceInfo {
    pub group: String,
    pub version: String,
    /// Plural resource name used in URLs and access checks.
    pub resource: String,
    pub singular: String,
    pub new_fn: fn() -> User,
    pub new_list_fn: fn() -> UserList,
    pub table_converter: Arc<dyn TableConverter>,
}

impl ResourceInfo {
    #[must_use]
    pub fn users(group: &str, version: &str) -> Self {
        Self {
            group: group.to_owned(),
            version: version.to_owned(),
            resource: "users".to_owned(),
            singular: "user".to_owned(),
            new_fn: User::default,
            new_list_fn: UserList::default,
            table_converter: Arc::new(ColumnTableConverter::users()),
        }
    }

    /// `<group>/<version>`, as served to clients.
    #[must_use]
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    /// `<resource>.<group>`, as used in error messages.
    #[must_use]
    pub fn group_resource(&self) -> String {
        format!("{}.{}", self.resource, self.group)
    }

    #[must_use]
    pub fn new_not_found(&self, name: &str) -> DomainError {
        DomainError::not_found(self.group_resource(), name)
    }
}

impl fmt::Debug for ResourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceInfo")
            .field("group", &self.group)
            .field("version", &self.version)
            .field("resource", &self.resource)
            .field("singular", &self.singular)
            .finish_non_exhaustive()
    }
}
