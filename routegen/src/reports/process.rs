//! Process command report data structures.

use std::path::PathBuf;

use routegen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from a processing run.
#[derive(Debug)]
pub struct ProcessReport {
    /// Annotation type the processor claimed.
    pub annotation: String,

    /// Number of declared elements carrying the annotation.
    pub annotated: usize,

    /// Rounds processed, including the final empty round.
    pub rounds: usize,

    /// Diagnostics reported by the processor, in order.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Source root.
    pub output_dir: PathBuf,
    /// Files created, in creation order.
    pub files: Vec<PathBuf>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the source root.
    pub path: String,
    /// File content.
    pub content: String,
}

impl ProcessReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Whether any error diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn render_diagnostics(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        out.key_value("Generated", &written.output_dir.display().to_string());
        if !written.files.is_empty() {
            out.newline();
            out.section(&format!("New sources ({})", written.files.len()));
            for file in &written.files {
                let shown = file.strip_prefix(&written.output_dir).unwrap_or(file);
                out.added_item(&shown.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}

impl Report for ProcessReport {
    fn render(&self, out: &mut dyn Output) {
        self.render_diagnostics(out);

        out.preformatted(&format!(
            "{} annotated element{} across {} round{} ({})",
            self.annotated,
            if self.annotated == 1 { "" } else { "s" },
            self.rounds,
            if self.rounds == 1 { "" } else { "s" },
            self.annotation
        ));
        out.newline();

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }

        let errors = self.error_count();
        if errors > 0 {
            out.newline();
            out.failure(&format!(
                "error: {} route{} skipped",
                errors,
                if errors == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(diagnostics: Vec<Diagnostic>, result: GenerationResult) -> ProcessReport {
        ProcessReport {
            annotation: "ARouter".to_string(),
            annotated: 1,
            rounds: 2,
            diagnostics,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(
            vec![Diagnostic::info("scan", "found route target Foo").at("p.Foo")],
            GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("gen"),
                files: vec![PathBuf::from("gen").join("Foo$ARouter.java")],
                debug_dir: None,
            }),
        );

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "note: found route target Foo (at p.Foo)",
                "",
                "1 annotated element across 2 rounds (ARouter)",
                "",
                "Generated: gen",
                "",
                "New sources (1):",
                "  + Foo$ARouter.java",
            ]
        );
        assert!(!report.has_errors());
    }

    #[test]
    fn test_render_preview_with_errors() {
        let report = report(
            vec![Diagnostic::error("validate", "route path for 'p.Foo' is empty")],
            GenerationResult::Preview(PreviewResult { files: vec![] }),
        );

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "! error: route path for 'p.Foo' is empty",
                "",
                "1 annotated element across 2 rounds (ARouter)",
                "",
                "-- Summary --",
                "0 files would be generated",
                "",
                "! error: 1 route skipped",
            ]
        );
        assert_eq!(report.error_count(), 1);
    }
}
