pub mod tree;
pub mod version;
