//! Node entity - one reconciliation unit

use crate::domain::value_objects::{Readiness, StatusClass};

/// One reconciliation unit with its readiness and declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    readiness: Readiness,
    message: String,
    dependencies: Vec<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, readiness: Readiness) -> Self {
        Self {
            name: name.into(),
            readiness,
            message: String::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Roots are nodes without declared dependencies, resolvable or not.
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }

    pub fn status(&self) -> StatusClass {
        StatusClass::classify(self.readiness, &self.message)
    }
}
