//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ResourceKind;
use crate::error::{FluxtreeError, FluxtreeResult};

use super::types::{ColorMode, Config};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "fluxtree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FluxtreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FluxtreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve and load the effective configuration.
///
/// An explicit path must exist. Otherwise the project file wins over the user
/// file, and defaults apply when neither exists. Environment overrides are
/// applied last.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> FluxtreeResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => project_root
            .map(|root| root.join(PROJECT_CONFIG_FILE))
            .filter(|p| p.is_file())
            .or_else(|| user_config_path().filter(|p| p.is_file())),
    };

    let loaded = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                path: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// `$XDG_CONFIG_HOME/fluxtree/config.toml`, falling back to `~/.config`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("fluxtree/config.toml"))
}

/// Apply environment variable overrides (FLUXTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(kubectl) = get_env("FLUXTREE_KUBECTL").filter(|v| !v.is_empty()) {
        config.source.kubectl = kubectl;
    }

    if let Some(context) = get_env("FLUXTREE_CONTEXT").filter(|v| !v.is_empty()) {
        config.source.context = Some(context);
    }

    if let Some(namespace) = get_env("FLUXTREE_NAMESPACE").filter(|v| !v.is_empty()) {
        config.source.namespace = namespace;
    }

    if let Some(kind) = get_env("FLUXTREE_KIND").and_then(|v| ResourceKind::parse(&v)) {
        config.source.kind = kind;
    }

    if let Some(color) = get_env("FLUXTREE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    if let Some(val) = get_env("FLUXTREE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "kubectl",
        "context",
        "namespace",
        "all_namespaces",
        "kind",
        "output",
        "color",
        "unicode",
        "tree",
        "show_detached",
        "show_messages",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
