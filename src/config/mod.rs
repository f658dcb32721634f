//! Configuration module for fluxtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FLUXTREE_*)
//! 3. Explicit `--config` file, or project config (./fluxtree.toml)
//! 4. User config (~/.config/fluxtree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, SourceConfig, TreeConfig};
