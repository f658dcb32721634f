//! Flux object model and flattening into status records
//!
//! Only the fields the tree needs are modelled: `metadata.name`,
//! `metadata.namespace`, `spec.dependsOn` and the `Ready` condition.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::StatusRecord;
use crate::domain::ports::StatusSourceError;

const READY_CONDITION: &str = "Ready";

#[derive(Debug, Clone, Deserialize)]
pub struct FluxObject {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: FluxSpec,
    #[serde(default)]
    pub status: FluxStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FluxSpec {
    #[serde(default, rename = "dependsOn")]
    pub depends_on: Vec<DependencyRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyRef {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FluxStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Everything a captured snapshot may contain.
///
/// The shape is decided from the document itself before any typed
/// deserialization, so one bad entry fails the whole snapshot instead of
/// matching a looser shape.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Records(Vec<StatusRecord>),
    List { items: Vec<FluxObject> },
    Objects(Vec<FluxObject>),
    Single(Box<FluxObject>),
}

impl Snapshot {
    /// Classify a parsed document and deserialize every entry strictly.
    ///
    /// - array whose first entry has `metadata`: Flux objects
    /// - any other array: status records
    /// - map with `items`: a Kubernetes `List`
    /// - map with `metadata`: one Flux object
    pub fn from_value(value: Value) -> Result<Self, StatusSourceError> {
        match value {
            Value::Array(entries) => {
                let objects = entries
                    .first()
                    .is_some_and(|first| first.get("metadata").is_some());
                if objects {
                    Ok(Snapshot::Objects(entries_as(entries, "object")?))
                } else {
                    Ok(Snapshot::Records(entries_as(entries, "record")?))
                }
            }
            Value::Object(mut map) => {
                if let Some(items) = map.remove("items") {
                    match items {
                        Value::Array(entries) => Ok(Snapshot::List {
                            items: entries_as(entries, "item")?,
                        }),
                        Value::Null => Ok(Snapshot::List { items: Vec::new() }),
                        other => Err(StatusSourceError::malformed(format!(
                            "`items` must be a list, found {}",
                            kind_of(&other)
                        ))),
                    }
                } else if map.contains_key("metadata") {
                    let object = serde_json::from_value(Value::Object(map))
                        .map_err(|e| StatusSourceError::malformed(format!("object: {}", e)))?;
                    Ok(Snapshot::Single(Box::new(object)))
                } else {
                    Err(StatusSourceError::malformed(
                        "expected a list of status records, a List with `items`, or a Flux object",
                    ))
                }
            }
            other => Err(StatusSourceError::malformed(format!(
                "expected a list or a map at the top level, found {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn into_records(self) -> Vec<StatusRecord> {
        match self {
            Snapshot::Records(records) => records,
            Snapshot::List { items } | Snapshot::Objects(items) => records_from_objects(&items),
            Snapshot::Single(object) => records_from_objects(std::slice::from_ref(&*object)),
        }
    }
}

/// Deserialize each entry, naming the first one that does not fit.
fn entries_as<T: DeserializeOwned>(
    entries: Vec<Value>,
    what: &str,
) -> Result<Vec<T>, StatusSourceError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| StatusSourceError::malformed(format!("{} {}: {}", what, i + 1, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

impl FluxObject {
    fn ready_condition(&self) -> Option<&Condition> {
        self.status
            .conditions
            .iter()
            .find(|c| c.kind == READY_CONDITION)
    }

    fn qualified(namespace: Option<&str>, name: &str) -> String {
        match namespace {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.to_string(),
        }
    }

    /// Flatten into the four-field record.
    ///
    /// With `qualify` set, the node and its dependencies are named
    /// `namespace/name`; a dependency without a namespace lives in the
    /// object's own namespace. Without it, only cross-namespace dependencies
    /// keep their prefix.
    pub fn to_record(&self, qualify: bool) -> StatusRecord {
        let own_ns = self.metadata.namespace.as_deref();

        let name = if qualify {
            Self::qualified(own_ns, &self.metadata.name)
        } else {
            self.metadata.name.clone()
        };

        let dependencies: Vec<String> = self
            .spec
            .depends_on
            .iter()
            .map(|dep| {
                let dep_ns = dep.namespace.as_deref().or(own_ns);
                if qualify || (dep.namespace.is_some() && dep_ns != own_ns) {
                    Self::qualified(dep_ns, &dep.name)
                } else {
                    dep.name.clone()
                }
            })
            .collect();

        let mut record = StatusRecord::new(name).with_dependencies(dependencies.join(","));
        if let Some(ready) = self.ready_condition() {
            record = record
                .with_ready(ready.status.as_str())
                .with_message(ready.message.as_str());
        }
        record
    }
}

/// Flatten objects, qualifying names only when they span several namespaces.
pub fn records_from_objects(objects: &[FluxObject]) -> Vec<StatusRecord> {
    let namespaces: BTreeSet<Option<&str>> = objects
        .iter()
        .map(|o| o.metadata.namespace.as_deref())
        .collect();
    let qualify = namespaces.len() > 1;
    objects.iter().map(|o| o.to_record(qualify)).collect()
}

pub fn parse_json(content: &str) -> Result<Vec<StatusRecord>, StatusSourceError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| StatusSourceError::malformed(format!("invalid JSON snapshot: {}", e)))?;
    Ok(Snapshot::from_value(value)?.into_records())
}

pub fn parse_yaml(content: &str) -> Result<Vec<StatusRecord>, StatusSourceError> {
    let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)
        .map_err(|e| StatusSourceError::malformed(format!("invalid YAML snapshot: {}", e)))?;
    let value = serde_json::to_value(yaml)
        .map_err(|e| StatusSourceError::malformed(format!("invalid YAML snapshot: {}", e)))?;
    Ok(Snapshot::from_value(value)?.into_records())
}
