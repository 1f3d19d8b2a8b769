//! Projection of legacy user rows onto the `User` resource.

use chrono::{DateTime, Utc};
use iam_users_sdk::{ANNO_KEY_LAST_SEEN_AT, ObjectMeta, User, UserSpec};

use super::meta::{MetaAccessor, format_rfc3339};
use super::ports::LegacyUser;

/// Builds the resource for one legacy row in namespace `ns`.
///
/// The resource version is the update time in Unix milliseconds, so two
/// reads of an unchanged row produce the same version and versions order
/// the same way update times do.
#[must_use]
pub fn to_user_item(u: &LegacyUser, ns: &str) -> User {
    let mut item = User {
        metadata: ObjectMeta {
            name: u.uid.clone(),
            namespace: ns.to_owned(),
            resource_version: u.updated.timestamp_millis().to_string(),
            creation_timestamp: Some(u.created),
            ..ObjectMeta::default()
        },
        spec: UserSpec {
            name: u.name.clone(),
            login: u.login.clone(),
            email: u.email.clone(),
            email_verified: u.email_verified,
            disabled: u.is_disabled,
            grafana_admin: u.is_admin,
            provisioned: u.is_provisioned,
        },
    };

    let mut meta = MetaAccessor::new(&mut item);
    meta.set_updated_timestamp(Some(&u.updated));
    meta.set_annotation(ANNO_KEY_LAST_SEEN_AT, &format_time(u.last_seen_at.as_ref()));
    meta.set_deprecated_internal_id(u.id);

    item
}

/// Formats a last-seen time. Absent values and anything within the first
/// second of the Unix epoch mean "never" and render as `""`.
#[must_use]
pub fn format_time(v: Option<&DateTime<Utc>>) -> String {
    match v {
        Some(ts) if ts.timestamp() != 0 => format_rfc3339(ts),
        _ => String::new(),
    }
}
