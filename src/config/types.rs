//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ResourceKind;
use crate::error::FluxtreeResult;
use crate::infrastructure::status::{DEFAULT_KUBECTL, DEFAULT_NAMESPACE};

use super::loader;

/// Where status comes from when no snapshot file is given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_kubectl")]
    pub kubectl: String,

    #[serde(default)]
    pub context: Option<String>,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub all_namespaces: bool,

    #[serde(default)]
    pub kind: ResourceKind,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kubectl: default_kubectl(),
            context: None,
            namespace: default_namespace(),
            all_namespaces: false,
            kind: ResourceKind::default(),
        }
    }
}

fn default_kubectl() -> String {
    DEFAULT_KUBECTL.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Tree rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// List nodes whose dependencies are all missing after the tree
    #[serde(default = "default_true")]
    pub show_detached: bool,

    /// Append the status message to unhealthy nodes
    #[serde(default)]
    pub show_messages: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            show_detached: true,
            show_messages: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tree: TreeConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> FluxtreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }
}
