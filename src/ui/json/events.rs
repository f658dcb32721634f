//! Shared JSON event types for consistent CLI output.
//!
//! Every line of `--json` output is one of these events.

use serde::Serialize;

use crate::domain::entities::Node;
use crate::domain::value_objects::{Readiness, StatusClass};
use crate::ui::views::tree::TreeStats;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// One rendered tree line.
#[derive(Debug, Clone, Serialize)]
pub struct NodeEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub parent: Option<&'a str>,
    pub depth: usize,
    pub status: StatusClass,
    pub ready: Readiness,
    pub message: &'a str,
    pub dependencies: &'a [String],
    pub detached: bool,
}

impl<'a> NodeEvent<'a> {
    pub fn new(node: &'a Node, parent: Option<&'a Node>, depth: usize, detached: bool) -> Self {
        Self {
            event: "node",
            name: node.name(),
            parent: parent.map(Node::name),
            depth,
            status: node.status(),
            ready: node.readiness(),
            message: node.message(),
            dependencies: node.dependencies(),
            detached,
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TreeStats>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
            summary: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_summary(mut self, summary: TreeStats) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }
}
