//! Domain Layer
//!
//! The core of fluxtree: status nodes and the forest built from them,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Status nodes and the raw status records they come from
//! - `value_objects/` - Readiness and status classification
//! - `services/` - The dependency forest
//! - `ports/` - Interface definitions for status sources
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never runs commands or reads files directly
//! 2. **Immutable snapshots** - A forest is built once and only read afterwards
//! 3. **Ports & Adapters** - Fetching status goes through the `StatusSource` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
