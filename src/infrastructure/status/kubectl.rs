//! Kubectl status source
//!
//! Shells out to `kubectl get <kind> -o json` and flattens the returned Flux
//! objects. Requires kubectl on PATH (or a configured binary) and a reachable
//! cluster.

use std::process::{Command, Stdio};

use super::flux;
use crate::domain::entities::StatusRecord;
use crate::domain::ports::{StatusSource, StatusSourceError};
use crate::domain::value_objects::ResourceKind;

pub const DEFAULT_KUBECTL: &str = "kubectl";
pub const DEFAULT_NAMESPACE: &str = "flux-system";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubectlStatusSource {
    binary: String,
    context: Option<String>,
    /// `None` queries all namespaces
    namespace: Option<String>,
    kind: ResourceKind,
}

impl Default for KubectlStatusSource {
    fn default() -> Self {
        Self {
            binary: DEFAULT_KUBECTL.to_string(),
            context: None,
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
            kind: ResourceKind::default(),
        }
    }
}

impl KubectlStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn all_namespaces(mut self) -> Self {
        self.namespace = None;
        self
    }

    pub fn with_kind(mut self, kind: ResourceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if the configured kubectl binary can be executed
    pub fn check_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("version")
            .arg("--client")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "get".to_string(),
            self.kind.resource().to_string(),
            "-o".to_string(),
            "json".to_string(),
        ];
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        match &self.namespace {
            Some(ns) => {
                args.push("--namespace".to_string());
                args.push(ns.clone());
            }
            None => args.push("--all-namespaces".to_string()),
        }
        args
    }
}

impl StatusSource for KubectlStatusSource {
    fn describe(&self) -> String {
        let scope = self.namespace.as_deref().unwrap_or("all namespaces");
        format!("{} get {} ({})", self.binary, self.kind, scope)
    }

    fn fetch(&self) -> Result<Vec<StatusRecord>, StatusSourceError> {
        let args = self.args();
        tracing::debug!(binary = %self.binary, args = ?args, "querying flux status");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                StatusSourceError::unavailable(format!("failed to run {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatusSourceError::unavailable(format!(
                "{} failed with exit code {:?}: {}",
                self.binary,
                output.status.code(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| StatusSourceError::malformed(format!("output is not UTF-8: {}", e)))?;
        let records = flux::parse_json(&stdout)?;
        tracing::debug!(count = records.len(), "received status records");
        Ok(records)
    }
}
