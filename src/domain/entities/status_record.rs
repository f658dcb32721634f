//! StatusRecord - the flat record a status source hands to the core
//!
//! Exactly four fields: `name`, `ready`, `message`, `dependencies`.

use serde::{Deserialize, Serialize};

use super::Node;
use crate::domain::value_objects::Readiness;

/// One flattened status record.
///
/// `dependencies` is a comma-separated list of names. Captured snapshots may
/// also carry it as a YAML/JSON list:
///
///   dependencies: "infra,sources"
///
/// or:
///
///   dependencies: [infra, sources]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub name: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_ready"
    )]
    pub ready: Option<String>,

    #[serde(default)]
    pub message: String,

    #[serde(default, deserialize_with = "deserialize_dependencies")]
    pub dependencies: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DependenciesDe {
    Joined(String),
    List(Vec<String>),
}

/// Unquoted YAML `ready: True` arrives as a bool.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ReadyDe {
    Text(String),
    Flag(bool),
}

fn deserialize_ready<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<ReadyDe>::deserialize(deserializer)? {
        None => None,
        Some(ReadyDe::Text(s)) => Some(s),
        Some(ReadyDe::Flag(true)) => Some("True".to_string()),
        Some(ReadyDe::Flag(false)) => Some("False".to_string()),
    })
}

fn deserialize_dependencies<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<DependenciesDe>::deserialize(deserializer)? {
        None => Ok(String::new()),
        Some(DependenciesDe::Joined(s)) => Ok(s),
        Some(DependenciesDe::List(list)) => Ok(list.join(",")),
    }
}

impl StatusRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ready: None,
            message: String::new(),
            dependencies: String::new(),
        }
    }

    pub fn with_ready(mut self, ready: impl Into<String>) -> Self {
        self.ready = Some(ready.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl Into<String>) -> Self {
        self.dependencies = dependencies.into();
        self
    }

    /// Dependency names in declared order, trimmed, empty entries dropped.
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn into_node(self) -> Node {
        let dependencies = self.dependency_names();
        Node::new(self.name, Readiness::from_condition(self.ready.as_deref()))
            .with_message(self.message)
            .with_dependencies(dependencies)
    }
}

impl From<StatusRecord> for Node {
    fn from(record: StatusRecord) -> Self {
        record.into_node()
    }
}
