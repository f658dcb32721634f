//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod status_source;

pub use status_source::{StatusSource, StatusSourceError};
