use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of the ingress relation a data bag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Publishes the ingress URL.
    Provider,
    /// Requests ingress and publishes its connection details.
    Requirer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Provider, Role::Requirer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Provider => "provider",
            Role::Requirer => "requirer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "provider" => Ok(Role::Provider),
            "requirer" => Ok(Role::Requirer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Provider".parse::<Role>(), Ok(Role::Provider));
        assert_eq!("requirer".parse::<Role>(), Ok(Role::Requirer));
        assert!("consumer".parse::<Role>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
