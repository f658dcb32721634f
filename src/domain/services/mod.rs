//! Domain Services
//!
//! - `DependencyForest` - parent/child views over a status snapshot

mod forest;

pub use forest::DependencyForest;
