//! Process operation - run every round and emit lookup classes.

use std::{path::Path, sync::Arc};

use eyre::{Context, Result};
use routegen_codegen::{Diagnostic, pipeline::SnapshotPlugin};
use routegen_core::{DirFiler, Filer, MemoryFiler};
use routegen_model::Declarations;

use crate::{
    language::LanguageSupport,
    reports::{GenerationResult, PreviewFile, PreviewResult, ProcessReport, WrittenResult},
};

/// Options for the process operation.
pub struct ProcessOptions<'a> {
    /// Source root for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Directory for per-phase snapshots, if requested.
    pub visualize: Option<&'a Path>,
}

/// Execute the process operation.
///
/// Runs the processor over all declared rounds plus the final empty round,
/// writing sources below the output directory or into memory for a preview.
pub fn process(
    declarations: &Declarations,
    lang: LanguageSupport,
    opts: ProcessOptions,
) -> Result<ProcessReport> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let (rounds, result) = if opts.dry_run {
        let mut filer = MemoryFiler::new();
        let rounds = run_rounds(declarations, &lang, &opts, &mut filer, &mut diagnostics)?;
        let files = filer
            .into_units()
            .into_iter()
            .map(|(path, content)| PreviewFile { path, content })
            .collect();
        (rounds, GenerationResult::Preview(PreviewResult { files }))
    } else {
        let mut filer = DirFiler::new(opts.output_dir);
        let rounds = run_rounds(declarations, &lang, &opts, &mut filer, &mut diagnostics)?;
        let written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: filer.created().to_vec(),
            debug_dir: opts.visualize.map(Path::to_path_buf),
        };
        (rounds, GenerationResult::Written(written))
    };

    Ok(ProcessReport {
        annotation: declarations.processor.annotation.clone(),
        annotated: declarations.annotated_count(),
        rounds,
        diagnostics,
        result,
    })
}

fn run_rounds(
    declarations: &Declarations,
    lang: &LanguageSupport,
    opts: &ProcessOptions,
    filer: &mut dyn Filer,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<usize> {
    let mut processor = lang.processor(&declarations.processor.annotation);
    let snapshots = opts.visualize.map(|dir| (dir, Arc::new(SnapshotPlugin::new())));
    if let Some((_, plugin)) = &snapshots {
        processor = processor.plugin(Arc::clone(plugin));
    }

    tracing::debug!(
        rounds = declarations.rounds.len(),
        dry_run = opts.dry_run,
        "running processor"
    );

    let rounds = processor.run(&declarations.options, &declarations.rounds, filer, diagnostics);

    // Snapshots are written even when a round was aborted.
    if let Some((dir, plugin)) = snapshots {
        plugin
            .write_to_dir(dir)
            .wrap_err_with(|| format!("Failed to write snapshots to {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), snapshots = plugin.snapshots().len(), "wrote phase snapshots");
    }

    rounds.wrap_err("Processing failed")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::language::Language;

    const DECLARATIONS: &str = r#"
        [options]
        content = "hello"

        [[round]]
        [[round.element]]
        package = "p"
        name = "Foo"
        annotations = [{ type = "ARouter", path = "/app/Foo" }]

        [[round.element]]
        package = "p"
        name = "Bar"
        kind = "interface"
        annotations = [{ type = "ARouter", path = "/app/Bar" }]
    "#;

    fn declarations() -> Declarations {
        DECLARATIONS.parse().unwrap()
    }

    #[test]
    fn test_dry_run_previews_without_writing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("generated");

        let report = process(
            &declarations(),
            LanguageSupport::get(Language::Java),
            ProcessOptions {
                output_dir: &out,
                dry_run: true,
                visualize: None,
            },
        )
        .unwrap();

        assert!(!out.exists());
        assert_eq!(report.rounds, 2);
        assert_eq!(report.annotated, 2);
        match &report.result {
            GenerationResult::Preview(preview) => {
                assert_eq!(preview.files.len(), 1);
                assert_eq!(preview.files[0].path, "p/Foo$ARouter.java");
                assert!(preview.files[0].content.contains("\"/app/Foo\".equals(path)"));
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_writes_sources_and_reports_errors() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("generated");

        let report = process(
            &declarations(),
            LanguageSupport::get(Language::Java),
            ProcessOptions {
                output_dir: &out,
                dry_run: false,
                visualize: None,
            },
        )
        .unwrap();

        assert!(out.join("p").join("Foo$ARouter.java").exists());
        assert!(!out.join("p").join("Bar$ARouter.java").exists());
        assert!(report.has_errors());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_failed_write_is_not_listed() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("generated");
        let blocked = out.join("p").join("Foo$ARouter.java");
        fs::create_dir_all(blocked.join("occupied")).unwrap();

        let declarations: Declarations = r#"
            [[round]]
            [[round.element]]
            package = "p"
            name = "Foo"
            annotations = [{ type = "ARouter", path = "/app/Foo" }]

            [[round.element]]
            package = "p"
            name = "Baz"
            annotations = [{ type = "ARouter", path = "/app/Baz" }]
        "#
        .parse()
        .unwrap();

        let report = process(
            &declarations,
            LanguageSupport::get(Language::Java),
            ProcessOptions {
                output_dir: &out,
                dry_run: false,
                visualize: None,
            },
        )
        .unwrap();

        assert_eq!(report.error_count(), 1);
        match &report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.files, vec![out.join("p").join("Baz$ARouter.java")]);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert!(blocked.is_dir());
        let names: Vec<_> = fs::read_dir(out.join("p"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let temp = TempDir::new().unwrap();
        let debug = temp.path().join("debug");

        process(
            &declarations(),
            LanguageSupport::get(Language::Java),
            ProcessOptions {
                output_dir: temp.path(),
                dry_run: true,
                visualize: Some(debug.as_path()),
            },
        )
        .unwrap();

        let snapshot = fs::read_to_string(debug.join("round-1-emit.json")).unwrap();
        assert!(snapshot.contains("Foo$ARouter.java"));
        assert!(debug.join("round-2-scan.json").exists());
    }
}
