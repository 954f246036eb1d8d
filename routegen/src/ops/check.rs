//! Check operation - run the pipeline without touching the filesystem.

use std::path::Path;

use eyre::{Context, Result};
use routegen_codegen::Diagnostic;
use routegen_core::MemoryFiler;
use routegen_model::Declarations;

use crate::{language::LanguageSupport, reports::CheckReport};

/// Execute the check operation.
///
/// Runs every round against an in-memory filer so nothing is written,
/// keeping the diagnostics and the number of artifacts produced.
pub fn check(
    declarations: &Declarations,
    declarations_path: &Path,
    lang: LanguageSupport,
) -> Result<CheckReport> {
    let mut processor = lang.processor(&declarations.processor.annotation);
    let mut filer = MemoryFiler::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    processor
        .run(
            &declarations.options,
            &declarations.rounds,
            &mut filer,
            &mut diagnostics,
        )
        .wrap_err("Validation failed")?;

    Ok(CheckReport {
        declarations_path: declarations_path.to_path_buf(),
        artifact_count: filer.len(),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_check_collects_diagnostics() {
        let declarations: Declarations = r#"
            [[round]]
            [[round.element]]
            package = "p"
            name = "Foo"
            source = "src/p/Foo.java:3"
            annotations = [{ type = "ARouter", path = "" }]

            [[round.element]]
            package = "p"
            name = "Bar"
            annotations = [{ type = "ARouter", path = "/app/Bar" }]
        "#
        .parse()
        .unwrap();

        let report = check(
            &declarations,
            Path::new("routes.toml"),
            LanguageSupport::get(Language::Java),
        )
        .unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.artifact_count, 1);
        assert_eq!(report.error_count(), 1);

        let error = report
            .diagnostics
            .iter()
            .find(|d| d.severity.is_error())
            .unwrap();
        assert_eq!(error.message, "route path for 'p.Foo' is empty");
        assert_eq!(error.location.as_deref(), Some("src/p/Foo.java:3"));
    }

    #[test]
    fn test_check_empty_declarations() {
        let report = check(
            &Declarations::default(),
            Path::new("routes.toml"),
            LanguageSupport::get(Language::Java),
        )
        .unwrap();

        assert!(report.is_valid());
        assert_eq!(report.artifact_count, 0);
        assert!(report.diagnostics.is_empty());
    }
}
