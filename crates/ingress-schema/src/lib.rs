//! Data-bag contracts for the `ingress` relation interface (v0).
//!
//! Two independent validators, one per side of the relation:
//!
//! - [`ProviderSchema`] — the app payload decodes to `ingress.url`, an
//!   absolute `http`/`https` URL.
//! - [`RequirerSchema`] — the app payload decodes to `port`, `host`,
//!   `model` and `name`.
//!
//! Both run the same two-phase pipeline: [`decode_field`] turns the raw
//! YAML text of the app scope into a mapping, then the role validates that
//! mapping into a typed record. Failures are classified as decode errors,
//! schema mismatches (missing keys) or validation errors (bad values).
//!
//! [`SchemaRegistry`] additionally exposes each role's contract as JSON
//! Schema for tooling that works on decoded documents.

pub mod config;
pub mod databag;
pub mod decode;
pub mod error;
pub mod provider;
pub mod registry;
pub mod requirer;
pub mod role;
pub mod schema;
mod validator;

pub use config::{ValidatorConfig, DEFAULT_DATA_KEY};
pub use databag::{DataBag, Scope};
pub use decode::{app_field, decode_field, RawField};
pub use error::{ErrorKind, IngressError, Result};
pub use provider::{parse_http_url, IngressUrl, ProviderRecord, ProviderSchema};
pub use registry::{json_schema, json_schema_with, SchemaRegistry};
pub use requirer::{RequirerRecord, RequirerSchema};
pub use role::Role;
pub use schema::{validate_role, validate_role_with, DataBagSchema, ValidatedRecord};
