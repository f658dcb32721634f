//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use fluxtree::presentation::factory;
//!
//! let use_case = factory::create_tree_use_case(&args, &config);
//! let forest = use_case.execute()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, TreeArgs};
pub use factory::create_tree_use_case;
