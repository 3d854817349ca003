//! Contracts for the `ingress` relation interface.
//!
//! The provider side publishes the URL under which an application is reachable;
//! the requirer side publishes the port, host, model and name it wants exposed.
//!
//! # Crate Structure
//!
//! - [`schema`] — Data-bag decoding, per-role validators and JSON Schema export
//!
//! Enable the `cli` feature to build the `ingress-interface` binary, which
//! validates data-bag documents from disk.

/// Re-export schema types.
pub mod schema {
    pub use ingress_schema::*;
}

pub use ingress_schema::{
    validate_role, DataBag, DataBagSchema, IngressError, ProviderRecord, ProviderSchema,
    RequirerRecord, RequirerSchema, Role, ValidatedRecord,
};
