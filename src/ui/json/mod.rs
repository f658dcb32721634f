//! JSON output utilities for CLI commands.
//!
//! This module provides:
//! - Shared event types for consistent JSON output (`events`)
//! - Helpers for emitting NDJSON events
//!
//! ## Usage
//!
//! ```ignore
//! use fluxtree::ui::json::{emit_event, events::*};
//!
//! emit_event(&StartEvent::new("tree"))?;
//! emit_event(&CompleteEvent::success("tree"))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
