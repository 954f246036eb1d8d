//! Check command report.

use std::path::PathBuf;

use routegen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Outcome of a validation-only run.
#[derive(Debug)]
pub struct CheckReport {
    pub declarations_path: PathBuf,
    /// Number of artifacts that would be generated.
    pub artifact_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        let path = self.declarations_path.display();
        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {path} is valid ({} artifact{})",
                self.artifact_count,
                plural(self.artifact_count)
            ));
        } else {
            let errors = self.error_count();
            out.failure(&format!("✗ {path} has {errors} error{}", plural(errors)));
        }
    }
}
