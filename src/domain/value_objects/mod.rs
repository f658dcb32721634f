//! Domain Value Objects
//!
//! Immutable value types that describe the state of a node.

mod readiness;
mod resource_kind;
mod status_class;

pub use readiness::Readiness;
pub use resource_kind::ResourceKind;
pub use status_class::{StatusClass, BLOCKED_KEYWORD};
