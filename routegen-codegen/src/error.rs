use std::io;

use routegen_core::ElementKind;
use thiserror::Error;

use crate::pipeline::Diagnostic;

/// Per-descriptor failures. Each skips only the affected artifact.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("route annotation on {kind} '{element}' is not supported, only classes can be routed")]
    UnsupportedElementKind {
        element: String,
        kind: ElementKind,
        location: String,
    },

    #[error("route path for '{element}' is empty")]
    EmptyPath { element: String, location: String },

    #[error("'{name}' in '{element}' is not a valid Java identifier: {reason}")]
    InvalidIdentifier {
        element: String,
        name: String,
        reason: &'static str,
        location: String,
    },

    #[error("failed to write '{unit}'")]
    Io {
        unit: String,
        location: String,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// Location of the declaration the error belongs to.
    pub fn location(&self) -> &str {
        match self {
            Self::UnsupportedElementKind { location, .. }
            | Self::EmptyPath { location, .. }
            | Self::InvalidIdentifier { location, .. }
            | Self::Io { location, .. } => location,
        }
    }

    /// Message including the underlying cause, if any.
    pub fn message(&self) -> String {
        match self {
            Self::Io { source, .. } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }

    /// Convert into an error diagnostic for the given phase.
    pub fn to_diagnostic(&self, phase: &str) -> Diagnostic {
        Diagnostic::error(phase, self.message()).at(self.location())
    }
}
