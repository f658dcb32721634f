//! File status source
//!
//! Reads a captured snapshot from disk or stdin (`-`). JSON and YAML are
//! accepted, either as `kubectl -o json|yaml` output or as a list of status
//! records.

use std::io::Read;
use std::path::{Path, PathBuf};

use super::flux;
use crate::domain::entities::StatusRecord;
use crate::domain::ports::{StatusSource, StatusSourceError};

pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }

    fn read(&self) -> Result<String, StatusSourceError> {
        if self.is_stdin() {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| StatusSourceError::unavailable(format!("failed to read stdin: {}", e)))?;
            return Ok(content);
        }

        std::fs::read_to_string(&self.path).map_err(|e| {
            StatusSourceError::unavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn format_for(&self, content: &str) -> Format {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            Some("json") => Format::Json,
            _ => sniff(content),
        }
    }
}

fn sniff(content: &str) -> Format {
    match content.trim_start().chars().next() {
        Some('{') | Some('[') => Format::Json,
        _ => Format::Yaml,
    }
}

/// Parse a snapshot whose format is unknown.
pub fn parse_snapshot(content: &str) -> Result<Vec<StatusRecord>, StatusSourceError> {
    match sniff(content) {
        Format::Json => flux::parse_json(content),
        Format::Yaml => flux::parse_yaml(content),
    }
}

impl StatusSource for FileStatusSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn fetch(&self) -> Result<Vec<StatusRecord>, StatusSourceError> {
        let content = self.read()?;
        if content.trim().is_empty() {
            return Err(StatusSourceError::malformed("snapshot is empty"));
        }

        match self.format_for(&content) {
            Format::Json => flux::parse_json(&content),
            Format::Yaml => flux::parse_yaml(&content),
        }
    }
}
