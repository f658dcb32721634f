//! Status source implementations

pub mod file;
pub mod flux;
pub mod kubectl;

pub use file::{parse_snapshot, FileStatusSource, STDIN_PATH};
pub use kubectl::{KubectlStatusSource, DEFAULT_KUBECTL, DEFAULT_NAMESPACE};
