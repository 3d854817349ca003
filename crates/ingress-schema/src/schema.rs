use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::databag::{DataBag, Scope};
use crate::error::Result;
use crate::provider::{ProviderRecord, ProviderSchema};
use crate::requirer::{RequirerRecord, RequirerSchema};
use crate::role::Role;

/// Contract for one side of the relation.
///
/// The unit scope is accepted for symmetry with the relation layer; neither
/// ingress role constrains it.
pub trait DataBagSchema {
    /// Typed record produced by a successful validation.
    type Record;

    /// Side of the relation this schema describes.
    const ROLE: Role;

    /// Validate the two scopes of a data bag.
    fn validate(&self, unit: &Scope, app: &Scope) -> Result<Self::Record>;

    /// Validate a whole data bag.
    fn validate_databag(&self, databag: &DataBag) -> Result<Self::Record> {
        self.validate(&databag.unit, &databag.app)
    }
}

/// Record produced by [`validate_role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ValidatedRecord {
    Provider(ProviderRecord),
    Requirer(RequirerRecord),
}

impl ValidatedRecord {
    pub fn role(&self) -> Role {
        match self {
            ValidatedRecord::Provider(_) => Role::Provider,
            ValidatedRecord::Requirer(_) => Role::Requirer,
        }
    }
}

/// Validate a data bag against the default-configured schema for `role`.
pub fn validate_role(role: Role, databag: &DataBag) -> Result<ValidatedRecord> {
    validate_role_with(role, ValidatorConfig::default(), databag)
}

/// Validate a data bag against the schema for `role` built from `config`.
pub fn validate_role_with(
    role: Role,
    config: ValidatorConfig,
    databag: &DataBag,
) -> Result<ValidatedRecord> {
    match role {
        Role::Provider => ProviderSchema::with_config(config)
            .validate_databag(databag)
            .map(ValidatedRecord::Provider),
        Role::Requirer => RequirerSchema::with_config(config)
            .validate_databag(databag)
            .map(ValidatedRecord::Requirer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn dispatches_by_role() {
        let provider = DataBag::new().with_app(
            "data",
            "ingress:\n  url: \"http://foo.bar:80/model_name-app_name\"\n",
        );
        let record = validate_role(Role::Provider, &provider).unwrap();
        assert_eq!(record.role(), Role::Provider);

        let err = validate_role(Role::Requirer, &provider).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaMismatch);
    }

    #[test]
    fn validated_record_serializes_with_role_tag() {
        let requirer = DataBag::new().with_app(
            "data",
            "name: app-name\nhost: hostname\nport: 4242\nmodel: model-name\n",
        );
        let record = validate_role(Role::Requirer, &requirer).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["role"], "requirer");
        assert_eq!(json["port"], 4242);
    }

    #[test]
    fn config_flows_through_dispatch() {
        let bag = DataBag::new().with_app("data", "name: a\nhost: h\nport: 0\nmodel: m\n");
        assert!(validate_role(Role::Requirer, &bag).is_ok());

        let config = ValidatorConfig {
            enforce_port_range: true,
            ..ValidatorConfig::default()
        };
        let err = validate_role_with(Role::Requirer, config, &bag).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn unit_scope_is_not_validated() {
        let bag = DataBag::new()
            .with_unit("anything", "{{ not yaml")
            .with_app("data", "ingress:\n  url: https://example.com/\n");
        assert!(validate_role(Role::Provider, &bag).is_ok());
    }
}
