//! fluxtree - dependency-aware status tree for Flux
//!
//! Reads Kustomization (or HelmRelease) readiness from kubectl or a captured
//! snapshot, arranges the objects by `spec.dependsOn`, and prints a tree in
//! which every node carries a health glyph.
//!
//! ```text
//! ● infrastructure
//! ├── ● cert-manager
//! │   └── ✗ ingress
//! └── ◌ apps
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::TreeUseCase;
pub use config::Config;
pub use domain::entities::{Node, StatusRecord};
pub use domain::ports::{StatusSource, StatusSourceError};
pub use domain::services::DependencyForest;
pub use domain::value_objects::{Readiness, ResourceKind, StatusClass};
pub use error::{FluxtreeError, FluxtreeResult};
pub use infrastructure::{FileStatusSource, KubectlStatusSource};
pub use ui::views::tree::{TreeOptions, TreeStats, TreeView};
