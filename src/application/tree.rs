//! Tree use case
//!
//! Fetches one snapshot, builds the forest and validates it before anything
//! is rendered: a run either produces a whole tree or fails up front.

use crate::domain::entities::Node;
use crate::domain::ports::StatusSource;
use crate::domain::services::DependencyForest;
use crate::error::FluxtreeResult;

pub struct TreeUseCase<S: StatusSource> {
    source: S,
}

impl<S: StatusSource> TreeUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn execute(&self) -> FluxtreeResult<DependencyForest> {
        let name = self.source.describe();
        tracing::info!(source = %name, "fetching status snapshot");

        let records = self
            .source
            .fetch()
            .map_err(|e| e.into_error(name.as_str()))?;
        let nodes: Vec<Node> = records.into_iter().map(Node::from).collect();

        let forest = DependencyForest::new(nodes)?;
        for (node, dependency) in forest.dangling_references() {
            tracing::warn!(
                node = node.name(),
                dependency,
                "dependency not found in snapshot"
            );
        }

        forest.ensure_acyclic()?;
        tracing::info!(
            nodes = forest.len(),
            roots = forest.roots().len(),
            "built dependency forest"
        );
        Ok(forest)
    }
}
