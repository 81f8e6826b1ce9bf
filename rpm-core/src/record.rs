//! The `Record` trait implemented by every stored resource type.

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{RpmError, RpmResult};
use crate::resource::Resource;

/// A record that lives in a store file, keyed by a server-owned `id`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const RESOURCE: Resource;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Check the payload against the resource schema before it is stored.
    fn validate(&self) -> RpmResult<()> {
        Ok(())
    }

    /// Fill in nested ids and back-references. Runs after `id` is pinned.
    fn normalize(&mut self) {}
}

/// Generate a fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Accept any JSON value for an `id` field, keeping it only if it is a string.
///
/// Incoming ids are overwritten by the store anyway, so `null` or a number
/// must not fail the whole payload.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        _ => String::new(),
    })
}

/// Shared check for required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> RpmResult<()> {
    if value.trim().is_empty() {
        return Err(RpmError::invalid(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Timestamps are stored as sent but must be RFC 3339.
pub(crate) fn check_timestamp(field: &str, value: Option<&str>) -> RpmResult<()> {
    if let Some(value) = value
        && let Err(e) = DateTime::parse_from_rfc3339(value)
    {
        return Err(RpmError::invalid(format!(
            "{field} must be an RFC 3339 timestamp, got '{value}': {e}"
        )));
    }
    Ok(())
}
