//! Typed view over the charm's configuration options.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::AppError;

/// Raw option values as delivered by a configuration source.
pub type ConfigValues = BTreeMap<String, Value>;

pub const SYS_LOCATION_KEY: &str = "sysLocation";
pub const SYS_CONTACT_KEY: &str = "sysContact";
pub const ACLS_KEY: &str = "acls";
pub const OTHER_KEY: &str = "other";

/// Configuration snapshot for a single hook invocation.
///
/// `acls` and `other` are kept as the raw multi-line text; splitting happens
/// when render attributes are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharmConfig {
    pub sys_location: String,
    pub sys_contact: String,
    pub acls: String,
    pub other: String,
}

impl CharmConfig {
    /// Populate the snapshot from a backing key/value store.
    ///
    /// All four options are required. Extra keys are ignored.
    pub fn from_values(values: &ConfigValues) -> Result<Self, AppError> {
        Ok(Self {
            sys_location: required_string(values, SYS_LOCATION_KEY)?,
            sys_contact: required_string(values, SYS_CONTACT_KEY)?,
            acls: required_string(values, ACLS_KEY)?,
            other: required_string(values, OTHER_KEY)?,
        })
    }
}

fn required_string(values: &ConfigValues, key: &str) -> Result<String, AppError> {
    match values.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Null) | None => Err(AppError::ConfigKeyMissing { key: key.to_string() }),
        Some(other) => Err(AppError::ConfigValueType {
            key: key.to_string(),
            found: value_type_name(other).to_string(),
        }),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
