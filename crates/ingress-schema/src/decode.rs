//! Decode step shared by both roles.
//!
//! The relation layer only guarantees that the app-scope payload is *some*
//! text. Before any typed validation runs, the text is parsed as YAML and
//! must produce a mapping. Input that is already structured passes through
//! untouched.

use serde_yaml::{Mapping, Value};

use crate::databag::Scope;
use crate::error::{IngressError, Result};

/// Raw app-scope payload as handed over by the relation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField {
    /// Serialized YAML text.
    Text(String),
    /// Already-decoded mapping.
    Mapping(Mapping),
}

impl From<&str> for RawField {
    fn from(text: &str) -> Self {
        RawField::Text(text.to_string())
    }
}

impl From<String> for RawField {
    fn from(text: String) -> Self {
        RawField::Text(text)
    }
}

impl From<&String> for RawField {
    fn from(text: &String) -> Self {
        RawField::Text(text.clone())
    }
}

impl From<Mapping> for RawField {
    fn from(mapping: Mapping) -> Self {
        RawField::Mapping(mapping)
    }
}

/// Decode a raw payload into a YAML mapping.
pub fn decode_field(raw: RawField) -> Result<Mapping> {
    let text = match raw {
        RawField::Mapping(mapping) => return Ok(mapping),
        RawField::Text(text) => text,
    };

    let value: Value = serde_yaml::from_str(&text)
        .map_err(|err| IngressError::decode("app", err.to_string()))?;

    match value {
        Value::Mapping(mapping) => {
            tracing::debug!(keys = mapping.len(), "decoded app payload");
            Ok(mapping)
        }
        Value::Tagged(tagged) => match tagged.value {
            Value::Mapping(mapping) => Ok(mapping),
            other => Err(not_a_mapping(&other)),
        },
        other => Err(not_a_mapping(&other)),
    }
}

/// Look up the serialized payload in the app scope.
pub fn app_field(app: &Scope, key: &str) -> Result<RawField> {
    app.get(key)
        .map(RawField::from)
        .ok_or_else(|| IngressError::missing(key))
}

/// Short name of a YAML value's type, used in error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Keys present in `mapping` that are not listed in `known`.
pub(crate) fn unknown_keys(mapping: &Mapping, known: &[&str]) -> Vec<String> {
    mapping
        .keys()
        .filter_map(|key| match key {
            Value::String(name) if known.contains(&name.as_str()) => None,
            Value::String(name) => Some(name.clone()),
            other => Some(format!("<{}>", type_name(other))),
        })
        .collect()
}

fn not_a_mapping(value: &Value) -> IngressError {
    IngressError::decode(
        "app",
        format!("expected a mapping, got {}", type_name(value)),
    )
}
