use crate::role::Role;

/// Broad classification of an [`IngressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The payload could not be decoded into a mapping.
    Decode,
    /// The payload decoded but a required key is absent.
    SchemaMismatch,
    /// A key is present but its value violates a type or format constraint.
    Validation,
    /// A data-bag document or JSON Schema could not be loaded.
    Load,
}

/// Errors that can occur while validating an ingress data bag.
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// The serialized field is not parseable as a YAML mapping.
    #[error("failed to decode {scope} data: {message}")]
    Decode { scope: String, message: String },

    /// A required key is missing.
    #[error("missing required field `{path}`")]
    SchemaMismatch { path: String },

    /// A value is present but invalid.
    #[error("invalid value for `{path}`: {message}")]
    Validation { path: String, message: String },

    /// A data-bag document could not be read or parsed.
    #[error("failed to load data bag: {0}")]
    DataBagLoad(String),

    /// A role's JSON Schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// No JSON Schema registered for the given role.
    #[error("no schema registered for {0}")]
    NoSchema(Role),

    /// A decoded document failed JSON Schema validation.
    #[error("validation failed for {role} document: {message}")]
    Document { role: Role, message: String },
}

impl IngressError {
    pub(crate) fn decode(scope: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            scope: scope.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::SchemaMismatch { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::Decode,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Self::Validation { .. } | Self::Document { .. } => ErrorKind::Validation,
            Self::DataBagLoad(_) | Self::CompileFailed(_) | Self::NoSchema(_) => ErrorKind::Load,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = IngressError::missing("ingress.url");
        assert_eq!(err.to_string(), "missing required field `ingress.url`");

        let err = IngressError::invalid("port", "expected an integer, got `abc`");
        assert_eq!(
            err.to_string(),
            "invalid value for `port`: expected an integer, got `abc`"
        );
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(IngressError::decode("app", "x").kind(), ErrorKind::Decode);
        assert_eq!(IngressError::missing("x").kind(), ErrorKind::SchemaMismatch);
        assert_eq!(IngressError::invalid("x", "y").kind(), ErrorKind::Validation);
        assert_eq!(
            IngressError::DataBagLoad("nope".to_string()).kind(),
            ErrorKind::Load
        );
        assert_eq!(
            IngressError::Document {
                role: Role::Provider,
                message: "bad".to_string()
            }
            .kind(),
            ErrorKind::Validation
        );
    }
}
