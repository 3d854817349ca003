use jsonschema::Validator;
use serde_json::Value;

use crate::error::{IngressError, Result};
use crate::role::Role;

pub(crate) fn validate_document(role: Role, document: &Value, validator: &Validator) -> Result<()> {
    let mut errors = validator.iter_errors(document);
    if let Some(first) = errors.next() {
        let mut message = first.to_string();
        for err in errors.take(3) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        return Err(IngressError::Document { role, message });
    }

    Ok(())
}
