use std::fmt;

use ingress_schema::{ErrorKind, IngressError};

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn ingress_error(context: &str, err: IngressError) -> CliError {
    let code = match err.kind() {
        ErrorKind::Decode | ErrorKind::SchemaMismatch | ErrorKind::Validation => DATA_INVALID,
        ErrorKind::Load => match &err {
            IngressError::DataBagLoad(_) => FAILURE,
            _ => INTERNAL,
        },
    };
    CliError::new(code, format!("{context}: {err}"))
}
