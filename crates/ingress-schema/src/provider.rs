//! Provider side: publishes the URL under which the requirer is reachable.
//!
//! ```yaml
//! data: |
//!   ingress:
//!     url: "http://<host>:<port>/<model>-<app>"
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use url::Url;

use crate::config::ValidatorConfig;
use crate::databag::Scope;
use crate::decode::{app_field, decode_field, type_name, unknown_keys, RawField};
use crate::error::{IngressError, Result};
use crate::role::Role;
use crate::schema::DataBagSchema;

/// Validated `ingress` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressUrl {
    /// URL exactly as published.
    pub url: String,
}

impl IngressUrl {
    /// Parsed form of [`IngressUrl::url`].
    pub fn parsed(&self) -> Result<Url> {
        parse_http_url("ingress.url", &self.url)
    }
}

/// Validated provider app data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub ingress: IngressUrl,
}

/// Provider-side contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderSchema {
    config: ValidatorConfig,
}

impl ProviderSchema {
    /// Create a provider schema with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider schema with explicit config.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get schema configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Decode and validate the serialized app payload.
    pub fn validate_app(&self, raw: impl Into<RawField>) -> Result<ProviderRecord> {
        let mapping = decode_field(raw.into())?;
        self.validate_mapping(&mapping)
    }

    /// Validate an already-decoded app payload.
    pub fn validate_mapping(&self, mapping: &Mapping) -> Result<ProviderRecord> {
        if self.config.strict_mode {
            reject_unknown(mapping, &["ingress"], "")?;
        }

        let ingress = match mapping.get("ingress") {
            Some(Value::Mapping(ingress)) => ingress,
            Some(other) => {
                return Err(IngressError::invalid(
                    "ingress",
                    format!("expected a mapping, got {}", type_name(other)),
                ))
            }
            None => return Err(IngressError::missing("ingress")),
        };

        if self.config.strict_mode {
            reject_unknown(ingress, &["url"], "ingress.")?;
        }

        let url = match ingress.get("url") {
            Some(Value::String(url)) => url,
            Some(other) => {
                return Err(IngressError::invalid(
                    "ingress.url",
                    format!("expected a string, got {}", type_name(other)),
                ))
            }
            None => return Err(IngressError::missing("ingress.url")),
        };

        parse_http_url("ingress.url", url)?;
        tracing::debug!(url = %url, "provider data valid");

        Ok(ProviderRecord {
            ingress: IngressUrl { url: url.clone() },
        })
    }
}

impl DataBagSchema for ProviderSchema {
    type Record = ProviderRecord;

    const ROLE: Role = Role::Provider;

    fn validate(&self, _unit: &Scope, app: &Scope) -> Result<ProviderRecord> {
        self.validate_app(app_field(app, self.config.data_key)?)
    }
}

/// Parse `raw` as an absolute `http`/`https` URL with a host.
pub fn parse_http_url(path: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|err| IngressError::invalid(path, format!("invalid URL `{raw}`: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(IngressError::invalid(
            path,
            format!("URL scheme `{}` not permitted", url.scheme()),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(IngressError::invalid(path, format!("URL `{raw}` has no host"))),
    }
}

fn reject_unknown(mapping: &Mapping, known: &[&str], prefix: &str) -> Result<()> {
    match unknown_keys(mapping, known).into_iter().next() {
        Some(extra) => Err(IngressError::invalid(
            format!("{prefix}{extra}"),
            "unexpected field",
        )),
        None => Ok(()),
    }
}
