//! Dependency forest over one status snapshot
//!
//! Nodes without dependencies are roots; a node's children are all nodes that
//! declare it as a dependency. Both views keep snapshot order.
//!
//! The forest owns the snapshot and is never mutated after construction. A
//! name index and a children index are built once, so `children_of` does not
//! rescan the snapshot on every call.

use std::collections::HashMap;

use crate::domain::entities::Node;
use crate::error::{FluxtreeError, FluxtreeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

#[derive(Debug, Clone)]
pub struct DependencyForest {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    children: Vec<Vec<usize>>,
}

impl DependencyForest {
    /// Build the forest. Fails if two nodes share a name.
    pub fn new(nodes: Vec<Node>) -> FluxtreeResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if index.insert(node.name().to_string(), pos).is_some() {
                return Err(FluxtreeError::DuplicateNode {
                    name: node.name().to_string(),
                });
            }
        }

        let mut children = vec![Vec::new(); nodes.len()];
        for (pos, node) in nodes.iter().enumerate() {
            let mut seen: Vec<usize> = Vec::new();
            for dep in node.dependencies() {
                if let Some(&parent) = index.get(dep.as_str()) {
                    if !seen.contains(&parent) {
                        seen.push(parent);
                        children[parent].push(pos);
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            index,
            children,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in snapshot order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&pos| &self.nodes[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Nodes with an empty dependency list, in snapshot order.
    pub fn roots(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_root()).collect()
    }

    /// Nodes whose dependency list contains `name`, in snapshot order.
    ///
    /// Unknown names have no children.
    pub fn children_of(&self, name: &str) -> Vec<&Node> {
        match self.index.get(name) {
            Some(&pos) => self.children[pos]
                .iter()
                .map(|&child| &self.nodes[child])
                .collect(),
            None => Vec::new(),
        }
    }

    /// `(node, dependency)` pairs where the dependency is not in the snapshot.
    pub fn dangling_references(&self) -> Vec<(&Node, &str)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.dependencies()
                    .iter()
                    .filter(|dep| !self.contains(dep))
                    .map(move |dep| (node, dep.as_str()))
            })
            .collect()
    }

    /// Non-root nodes none of whose dependencies exist in the snapshot.
    ///
    /// No traversal from a root ever reaches these nodes or their
    /// descendants.
    pub fn detached_roots(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| !n.is_root() && n.dependencies().iter().all(|d| !self.contains(d)))
            .collect()
    }

    /// Find one dependency cycle, if any.
    ///
    /// The cycle is returned in dependency order (each name is a dependency
    /// of the next) with the first name repeated at the end.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut path = Vec::new();
        for start in 0..self.nodes.len() {
            if marks[start] == Mark::Unvisited {
                if let Some(cycle) = self.visit(start, &mut marks, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    pub fn ensure_acyclic(&self) -> FluxtreeResult<()> {
        match self.find_cycle() {
            Some(cycle) => Err(FluxtreeError::CycleInDependencies { cycle }),
            None => Ok(()),
        }
    }

    fn visit(&self, pos: usize, marks: &mut [Mark], path: &mut Vec<usize>) -> Option<Vec<String>> {
        marks[pos] = Mark::OnPath;
        path.push(pos);

        for &child in &self.children[pos] {
            match marks[child] {
                Mark::OnPath => {
                    let start = path.iter().position(|&p| p == child)?;
                    let mut cycle: Vec<String> = path[start..]
                        .iter()
                        .map(|&p| self.nodes[p].name().to_string())
                        .collect();
                    cycle.push(self.nodes[child].name().to_string());
                    return Some(cycle);
                }
                Mark::Unvisited => {
                    if let Some(cycle) = self.visit(child, marks, path) {
                        return Some(cycle);
                    }
                }
                Mark::Done => {}
            }
        }

        path.pop();
        marks[pos] = Mark::Done;
        None
    }
}
