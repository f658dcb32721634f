//! Terminal rendering: theme, capability detection, primitives, views and
//! NDJSON events.

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
