//! Status classification shown next to every node in the tree

use serde::Serialize;

use super::Readiness;

/// Keyword Flux puts in the `Ready` message while a node waits on a dependency.
///
/// Matching it is a best-effort heuristic over free text: the controller does
/// not expose a typed "blocked" reason.
pub const BLOCKED_KEYWORD: &str = "dependency";

/// Presentation class of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// Reconciled and ready
    Healthy,
    /// Not ready because something it depends on is not ready yet
    Blocked,
    /// Not ready for any other reason
    Failed,
}

impl StatusClass {
    /// Classify a node from its readiness and status message.
    pub fn classify(readiness: Readiness, message: &str) -> Self {
        if readiness.is_ready() {
            StatusClass::Healthy
        } else if message.contains(BLOCKED_KEYWORD) {
            StatusClass::Blocked
        } else {
            StatusClass::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Healthy => "healthy",
            StatusClass::Blocked => "blocked",
            StatusClass::Failed => "failed",
        }
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
