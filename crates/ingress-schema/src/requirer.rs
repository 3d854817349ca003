//! Requirer side: asks for ingress and publishes where it listens.
//!
//! ```yaml
//! data: |
//!   name: <app-name>
//!   host: <hostname>
//!   port: <integer>
//!   model: <model-name>
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::config::ValidatorConfig;
use crate::databag::Scope;
use crate::decode::{app_field, decode_field, type_name, unknown_keys, RawField};
use crate::error::{IngressError, Result};
use crate::role::Role;
use crate::schema::DataBagSchema;

const FIELDS: [&str; 4] = ["port", "host", "model", "name"];

/// Validated requirer app data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirerRecord {
    /// Port the application wants exposed.
    pub port: i64,
    /// Hostname the application wants exposed.
    pub host: String,
    /// Model the application is deployed in.
    pub model: String,
    /// Name of the application requesting ingress.
    pub name: String,
}

impl RequirerRecord {
    /// URL a provider conventionally publishes back for this requirer.
    pub fn conventional_url(&self) -> String {
        format!(
            "http://{}:{}/{}-{}",
            self.host, self.port, self.model, self.name
        )
    }
}

/// Requirer-side contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirerSchema {
    config: ValidatorConfig,
}

impl RequirerSchema {
    /// Create a requirer schema with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a requirer schema with explicit config.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get schema configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Decode and validate the serialized app payload.
    pub fn validate_app(&self, raw: impl Into<RawField>) -> Result<RequirerRecord> {
        let mapping = decode_field(raw.into())?;
        self.validate_mapping(&mapping)
    }

    /// Validate an already-decoded app payload.
    pub fn validate_mapping(&self, mapping: &Mapping) -> Result<RequirerRecord> {
        let lookup = |field: &str| mapping.get(field).ok_or_else(|| IngressError::missing(field));
        let (port, host, model, name) = (
            lookup("port")?,
            lookup("host")?,
            lookup("model")?,
            lookup("name")?,
        );

        if self.config.strict_mode {
            if let Some(extra) = unknown_keys(mapping, &FIELDS).into_iter().next() {
                return Err(IngressError::invalid(extra, "unexpected field"));
            }
        }

        let record = RequirerRecord {
            port: self.port(port)?,
            host: self.text("host", host)?,
            model: self.text("model", model)?,
            name: self.text("name", name)?,
        };

        tracing::debug!(
            name = %record.name,
            model = %record.model,
            host = %record.host,
            port = record.port,
            "requirer data valid"
        );
        Ok(record)
    }

    fn port(&self, value: &Value) -> Result<i64> {
        let port = coerce_int(value).ok_or_else(|| {
            IngressError::invalid("port", format!("expected an integer, got {}", describe(value)))
        })?;

        if self.config.enforce_port_range && !(1..=65535).contains(&port) {
            return Err(IngressError::invalid(
                "port",
                format!("{port} is outside 1..=65535"),
            ));
        }

        Ok(port)
    }

    fn text(&self, field: &str, value: &Value) -> Result<String> {
        let text = match value {
            Value::String(text) => text.clone(),
            other => {
                return Err(IngressError::invalid(
                    field,
                    format!("expected a string, got {}", type_name(other)),
                ))
            }
        };

        if self.config.require_non_empty && text.trim().is_empty() {
            return Err(IngressError::invalid(field, "must not be empty"));
        }

        Ok(text)
    }
}

impl DataBagSchema for RequirerSchema {
    type Record = RequirerRecord;

    const ROLE: Role = Role::Requirer;

    fn validate(&self, _unit: &Scope, app: &Scope) -> Result<RequirerRecord> {
        self.validate_app(app_field(app, self.config.data_key)?)
    }
}

/// Integers, integral floats and decimal strings coerce; booleans never do.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => format!("`{text}`"),
        other => type_name(other).to_string(),
    }
}
