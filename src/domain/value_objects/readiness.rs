//! Readiness value object - the tri-state `Ready` condition of a resource

use serde::{Deserialize, Serialize};

/// Readiness of a reconciliation unit, mapped from its `Ready` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    /// Condition status is `"True"`
    Ready,
    /// Condition present with any other status
    NotReady,
    /// No `Ready` condition reported yet
    #[default]
    Unknown,
}

impl Readiness {
    /// Map an upstream condition status string.
    ///
    /// Only the exact string `"True"` counts as ready; an absent condition is
    /// `Unknown` and everything else is `NotReady`.
    pub fn from_condition(status: Option<&str>) -> Self {
        match status {
            Some("True") => Readiness::Ready,
            Some(_) => Readiness::NotReady,
            None => Readiness::Unknown,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Readiness::Ready => write!(f, "True"),
            Readiness::NotReady => write!(f, "False"),
            Readiness::Unknown => write!(f, "Unknown"),
        }
    }
}
