//! Accessor for the system-managed part of [`ObjectMeta`].
//!
//! Resources are built from their domain fields first; the values that are
//! derived or stored as annotations/labels are then applied through
//! [`MetaAccessor`], which exposes only those few setters.

use chrono::{DateTime, SecondsFormat, Utc};
use iam_users_sdk::{
    ANNO_KEY_UPDATED_TIMESTAMP, LABEL_KEY_DEPRECATED_INTERNAL_ID, ObjectMeta, User,
};

/// Implemented by resources whose metadata can be accessed generically.
pub trait HasObjectMeta {
    fn object_meta(&self) -> &ObjectMeta;
    fn object_meta_mut(&mut self) -> &mut ObjectMeta;
}

impl HasObjectMeta for User {
    fn object_meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn object_meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

pub struct MetaAccessor<'a> {
    meta: &'a mut ObjectMeta,
}

impl<'a> MetaAccessor<'a> {
    #[must_use]
    pub fn new<T: HasObjectMeta>(obj: &'a mut T) -> Self {
        Self {
            meta: obj.object_meta_mut(),
        }
    }

    /// Sets or removes (`None`) the timestamp the resource version is based on.
    pub fn set_updated_timestamp(&mut self, ts: Option<&DateTime<Utc>>) {
        let value = ts.map(format_rfc3339).unwrap_or_default();
        self.set_annotation(ANNO_KEY_UPDATED_TIMESTAMP, &value);
    }

    /// Sets an annotation. An empty value removes the key.
    pub fn set_annotation(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.meta.annotations.remove(key);
        } else {
            self.meta
                .annotations
                .insert(key.to_owned(), value.to_owned());
        }
    }

    /// Records the legacy numeric id. `0` removes the label.
    pub fn set_deprecated_internal_id(&mut self, id: i64) {
        if id == 0 {
            self.meta.labels.remove(LABEL_KEY_DEPRECATED_INTERNAL_ID);
        } else {
            self.meta
                .labels
                .insert(LABEL_KEY_DEPRECATED_INTERNAL_ID.to_owned(), id.to_string());
        }
    }
}

/// Reads the updated timestamp annotation back, `None` if absent or invalid.
#[must_use]
pub fn updated_timestamp<T: HasObjectMeta>(obj: &T) -> Option<DateTime<Utc>> {
    let raw = obj.object_meta().annotation(ANNO_KEY_UPDATED_TIMESTAMP);
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Reads the legacy numeric id back, `0` if absent or invalid.
#[must_use]
pub fn deprecated_internal_id<T: HasObjectMeta>(obj: &T) -> i64 {
    obj.object_meta()
        .label(LABEL_KEY_DEPRECATED_INTERNAL_ID)
        .parse()
        .unwrap_or_default()
}

/// RFC-3339 in UTC with whole seconds, e.g. `2024-01-02T03:04:05Z`.
pub(crate) fn format_rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
