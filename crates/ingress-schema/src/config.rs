/// Key under which the serialized payload lives in the app scope.
pub const DEFAULT_DATA_KEY: &str = "data";

/// Controls data-bag validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// App-scope key holding the serialized payload.
    pub data_key: &'static str,
    /// When true, decoded payloads reject keys the contract does not declare.
    pub strict_mode: bool,
    /// When true, requirer ports must fall within 1..=65535.
    pub enforce_port_range: bool,
    /// When true, requirer text fields must not be empty.
    pub require_non_empty: bool,
    /// Maximum bytes accepted when loading a data-bag document from disk.
    pub max_databag_size: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            data_key: DEFAULT_DATA_KEY,
            strict_mode: false,
            enforce_port_range: false,
            require_non_empty: false,
            max_databag_size: 256 * 1024,
        }
    }
}
