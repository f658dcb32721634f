//! Domain Entities
//!
//! - `Node` - One reconciliation unit with readiness and dependencies
//! - `StatusRecord` - The flat four-field record a status source produces

mod node;
mod status_record;

pub use node::Node;
pub use status_record::StatusRecord;
