//! Common test utilities for fluxtree CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable status snapshots

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
