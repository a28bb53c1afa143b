//! Views derived from a raw document

use crate::transport;
use serde_yaml::{Mapping, Value};
use types::{ConfigError, LoaderError, RawDocument, Result};

/// Parse the raw document into a YAML mapping.
///
/// An empty document yields an empty mapping.
pub fn as_hash(document: &RawDocument) -> Result<Mapping> {
    let origin = || document.source().to_string();

    let value: Value =
        serde_yaml::from_str(document.as_str()).map_err(|source| ConfigError::Parse {
            origin: origin(),
            source,
        })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(ConfigError::NotAMapping {
            origin: origin(),
            found: value_kind(&other).to_string(),
        }
        .into()),
    }
}

/// Transport string for the raw document
pub fn as_env_value(document: &RawDocument) -> Result<String> {
    transport::encode(document.as_bytes())
        .map_err(|source| LoaderError::transport(document.source().to_string(), source))
}

/// `NAME=VALUE` line ready to export
pub fn as_env_assignment(env_name: &str, document: &RawDocument) -> Result<String> {
    Ok(format!("{}={}", env_name, as_env_value(document)?))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
