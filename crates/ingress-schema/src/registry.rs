use std::collections::HashMap;

use jsonschema::Validator;
use serde_json::{json, Map, Value};

use crate::config::ValidatorConfig;
use crate::databag::DataBag;
use crate::decode::{app_field, decode_field};
use crate::error::{IngressError, Result};
use crate::role::Role;
use crate::validator::validate_document;

const SCHEMA_ID_BASE: &str = "https://schemas.3leaps.dev/ingress-interface/v0";

/// JSON Schema (draft 2020-12) of the decoded app payload for `role`.
pub fn json_schema(role: Role) -> Value {
    json_schema_with(role, false)
}

/// Like [`json_schema`], optionally closing every object to unknown keys.
pub fn json_schema_with(role: Role, strict: bool) -> Value {
    let mut schema = match role {
        Role::Provider => json!({
            "title": "Ingress provider app data",
            "type": "object",
            "properties": {
                "ingress": {
                    "type": "object",
                    "properties": {
                        "url": {
                            "type": "string",
                            "format": "uri",
                            "pattern": "^[Hh][Tt][Tt][Pp][Ss]?://[^/?#]+"
                        }
                    },
                    "required": ["url"]
                }
            },
            "required": ["ingress"]
        }),
        Role::Requirer => json!({
            "title": "Ingress requirer app data",
            "type": "object",
            "properties": {
                "port": { "type": "integer", "description": "Port the application wishes to be exposed." },
                "host": { "type": "string", "description": "Hostname the application wishes to be exposed." },
                "model": { "type": "string", "description": "Model the application is in." },
                "name": { "type": "string", "description": "Name of the application requesting ingress." }
            },
            "required": ["port", "host", "model", "name"]
        }),
    };

    if let Value::Object(map) = &mut schema {
        map.insert(
            "$schema".to_string(),
            Value::String("https://json-schema.org/draft/2020-12/schema".to_string()),
        );
        map.insert(
            "$id".to_string(),
            Value::String(format!("{SCHEMA_ID_BASE}/{role}.schema.json")),
        );
    }
    if strict {
        close_objects(&mut schema);
    }
    schema
}

/// Role-keyed registry of compiled JSON Schema validators.
pub struct SchemaRegistry {
    validators: HashMap<Role, Validator>,
    config: ValidatorConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validators: HashMap::new(),
            config,
        }
    }

    /// Registry holding the built-in schema of every role.
    pub fn builtin() -> Result<Self> {
        Self::builtin_with_config(ValidatorConfig::default())
    }

    /// Built-in registry with explicit config.
    pub fn builtin_with_config(config: ValidatorConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        for role in Role::ALL {
            let schema = json_schema_with(role, config.strict_mode);
            registry.register_value(role, &schema)?;
        }
        Ok(registry)
    }

    /// Register a schema for a role from a JSON string.
    pub fn register(&mut self, role: Role, schema_json: &str) -> Result<()> {
        let schema: Value = serde_json::from_str(schema_json)
            .map_err(|err| IngressError::CompileFailed(err.to_string()))?;
        self.register_value(role, &schema)
    }

    /// Register a schema for a role from a JSON value.
    pub fn register_value(&mut self, role: Role, schema: &Value) -> Result<()> {
        let compiled = jsonschema::validator_for(schema)
            .map_err(|err| IngressError::CompileFailed(err.to_string()))?;

        tracing::debug!(%role, "registered schema");
        self.validators.insert(role, compiled);
        Ok(())
    }

    /// Validate a decoded app payload against the role's schema.
    pub fn validate_document(&self, role: Role, document: &Value) -> Result<()> {
        match self.validators.get(&role) {
            Some(validator) => validate_document(role, document, validator),
            None => Err(IngressError::NoSchema(role)),
        }
    }

    /// Decode a data bag's app payload and validate it against the role's schema.
    pub fn validate_databag(&self, role: Role, databag: &DataBag) -> Result<()> {
        let mapping = decode_field(app_field(&databag.app, self.config.data_key)?)?;
        let document = serde_json::to_value(serde_yaml::Value::Mapping(mapping))
            .map_err(|err| IngressError::decode("app", err.to_string()))?;
        self.validate_document(role, &document)
    }

    /// Check if a role has a registered schema.
    pub fn has_schema(&self, role: Role) -> bool {
        self.validators.contains_key(&role)
    }

    /// Roles that have registered schemas.
    pub fn roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.validators.keys().copied().collect();
        roles.sort_unstable();
        roles
    }

    /// Get registry configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn close_objects(value: &mut Value) {
    if let Value::Object(map) = value {
        if is_object_schema(map) && !map.contains_key("additionalProperties") {
            map.insert("additionalProperties".to_string(), Value::Bool(false));
        }
        if let Some(Value::Object(properties)) = map.get_mut("properties") {
            for property in properties.values_mut() {
                close_objects(property);
            }
        }
    }
}

fn is_object_schema(map: &Map<String, Value>) -> bool {
    matches!(map.get("type"), Some(Value::String(kind)) if kind == "object")
}
