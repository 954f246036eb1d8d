//! Per-round state passed through pipeline phases.

use routegen_core::Filer;
use routegen_model::RoundEnvironment;
use serde::Serialize;

use super::diagnostic::Diagnostic;
use crate::{ArtifactSpec, RouteDescriptor};

/// A compilation unit written during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedUnit {
    pub package: String,
    pub file_name: String,
    /// Qualified name of the generated class.
    pub qualified_name: String,
}

/// State for one processing round.
///
/// Constructed by the [`Processor`](super::Processor) before each round and
/// discarded after it. Each phase reads the previous phase's output and
/// records its own.
pub struct RoundContext<'a> {
    /// Round number, starting at 1.
    pub round: usize,
    /// Annotation type being processed.
    pub annotation: &'a str,
    /// Elements visible this round.
    pub environment: &'a dyn RoundEnvironment,
    /// File-creation capability.
    pub filer: &'a mut dyn Filer,
    /// Descriptors found by the scan phase.
    pub descriptors: Vec<RouteDescriptor>,
    /// Descriptors that passed validation.
    pub validated: Vec<RouteDescriptor>,
    /// Artifacts produced by the generate phase.
    pub artifacts: Vec<ArtifactSpec>,
    /// Units written by the emit phase.
    pub emitted: Vec<EmittedUnit>,
    /// Diagnostics collected during the round.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> RoundContext<'a> {
    pub fn new(
        round: usize,
        annotation: &'a str,
        environment: &'a dyn RoundEnvironment,
        filer: &'a mut dyn Filer,
    ) -> Self {
        Self {
            round,
            annotation,
            environment,
            filer,
            descriptors: Vec::new(),
            validated: Vec::new(),
            artifacts: Vec::new(),
            emitted: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
