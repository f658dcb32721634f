//! StatusSource port - abstraction for fetching reconciliation status
//!
//! The core only relies on the four-field `StatusRecord` shape. How the
//! records are obtained (kubectl, a captured file) is an infrastructure
//! concern.

use crate::domain::entities::StatusRecord;
use crate::error::FluxtreeError;

/// Produces one snapshot of status records per call.
pub trait StatusSource {
    /// Human readable name used in diagnostics (e.g. `kubectl`, a file path).
    fn describe(&self) -> String;

    /// Fetch the current snapshot, in the order the upstream enumerates it.
    fn fetch(&self) -> Result<Vec<StatusRecord>, StatusSourceError>;
}

impl<S: StatusSource + ?Sized> StatusSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<Vec<StatusRecord>, StatusSourceError> {
        (**self).fetch()
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StatusSourceError {
    #[error("{message}")]
    Unavailable { message: String },

    #[error("{message}")]
    Malformed { message: String },
}

impl StatusSourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StatusSourceError::Unavailable {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        StatusSourceError::Malformed {
            message: message.into(),
        }
    }

    /// Attach the source name and lift into the library error.
    pub fn into_error(self, source_name: impl Into<String>) -> FluxtreeError {
        match self {
            StatusSourceError::Unavailable { message } => FluxtreeError::InputUnavailable {
                source_name: source_name.into(),
                message,
            },
            StatusSourceError::Malformed { message } => FluxtreeError::MalformedInput {
                source_name: source_name.into(),
                message,
            },
        }
    }
}
