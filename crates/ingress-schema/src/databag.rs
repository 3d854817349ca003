use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngressError, Result};

/// One scope of a data bag: string keys to string values.
pub type Scope = BTreeMap<String, String>;

/// Relation data bag with its unit and app scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataBag {
    #[serde(default)]
    pub unit: Scope,
    #[serde(default)]
    pub app: Scope,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert into the app scope.
    pub fn with_app(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.app.insert(key.into(), value.into());
        self
    }

    /// Builder-style insert into the unit scope.
    pub fn with_unit(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.unit.insert(key.into(), value.into());
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| IngressError::DataBagLoad(err.to_string()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|err| IngressError::DataBagLoad(err.to_string()))
    }

    /// Load a data bag document from disk, dispatching on the file extension.
    ///
    /// `.json` is parsed as JSON; `.yaml`, `.yml` and anything else as YAML.
    /// Files larger than `max_bytes` are rejected.
    pub fn from_path(path: &Path, max_bytes: usize) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| {
            IngressError::DataBagLoad(format!("failed opening {}: {err}", path.display()))
        })?;
        let metadata = file
            .metadata()
            .map_err(|err| IngressError::DataBagLoad(err.to_string()))?;
        if !metadata.is_file() {
            return Err(IngressError::DataBagLoad(format!(
                "not a regular file: {}",
                path.display()
            )));
        }
        if metadata.len() > max_bytes as u64 {
            return Err(IngressError::DataBagLoad(format!(
                "data bag too large ({} bytes): {}",
                metadata.len(),
                path.display()
            )));
        }

        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                IngressError::DataBagLoad(format!("failed reading {}: {err}", path.display()))
            })?;
        if content.len() > max_bytes {
            return Err(IngressError::DataBagLoad(format!(
                "data bag too large while reading: {}",
                path.display()
            )));
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "loading data bag");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
