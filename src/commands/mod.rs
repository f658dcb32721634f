//! Command handlers

pub mod tree;
pub mod version;
