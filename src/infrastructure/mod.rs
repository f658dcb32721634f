//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `status/` - Status sources (kubectl, captured snapshot files)

pub mod status;

// Re-export for convenience
pub use status::{FileStatusSource, KubectlStatusSource};
