//! Error types for fluxtree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fluxtree operations
pub type FluxtreeResult<T> = Result<T, FluxtreeError>;

/// Main error type for fluxtree operations
#[derive(Error, Debug)]
pub enum FluxtreeError {
    /// The status source could not be queried
    #[error("status input unavailable from {source_name}: {message}")]
    InputUnavailable {
        source_name: String,
        message: String,
    },

    /// The status source answered with data we cannot parse
    #[error("malformed status input from {source_name}: {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    /// Two nodes in one snapshot share a name
    #[error("duplicate node '{name}' in status snapshot")]
    DuplicateNode { name: String },

    /// The dependency relation loops back on itself
    #[error("dependency cycle detected: {}", cycle.join(" -> "))]
    CycleInDependencies { cycle: Vec<String> },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FluxtreeError {
    /// Short machine-readable code used by JSON error events.
    pub fn code(&self) -> &'static str {
        match self {
            FluxtreeError::InputUnavailable { .. } => "input_unavailable",
            FluxtreeError::MalformedInput { .. } => "malformed_input",
            FluxtreeError::DuplicateNode { .. } => "duplicate_node",
            FluxtreeError::CycleInDependencies { .. } => "dependency_cycle",
            FluxtreeError::InvalidConfig { .. } => "invalid_config",
            FluxtreeError::Io(_) => "io",
            FluxtreeError::Json(_) => "json",
            FluxtreeError::Yaml(_) => "yaml",
        }
    }
}
