//! Test utilities for artifact renderers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the sources below the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
///
/// Compiles every `.java` file below the source root into `<dir>/classes`.
pub struct JavacChecker;

impl JavacChecker {
    /// Whether a `javac` binary can be run.
    pub fn available() -> bool {
        tool_available("javac")
    }

    /// Directory the classes are compiled into.
    pub fn classes_dir(dir: &Path) -> PathBuf {
        dir.join("classes")
    }
}

impl CompileChecker for JavacChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let sources = java_sources(dir).map_err(|e| CompileError {
            message: format!("Failed to list sources in {}: {}", dir.display(), e),
            output: String::new(),
        })?;

        let output = Command::new("javac")
            .arg("-d")
            .arg(Self::classes_dir(dir))
            .args(&sources)
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        check_output("javac failed", output).map(|_| ())
    }
}

/// Run a compiled main class and return its stdout.
pub fn run_java(classpath: &Path, main_class: &str) -> Result<String, CompileError> {
    let output = Command::new("java")
        .arg("-cp")
        .arg(classpath)
        .arg(main_class)
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run java: {}", e),
            output: String::new(),
        })?;

    check_output("java failed", output)
}

fn check_output(message: &str, output: Output) -> Result<String, CompileError> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(CompileError {
            message: message.to_string(),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

fn tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// All `.java` files below `dir`, sorted.
fn java_sources(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "java") {
                sources.push(path);
            }
        }
    }

    sources.sort();
    Ok(sources)
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate sources into a temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Generate sources and check that they compile.
///
/// Returns the temporary directory so callers can run the compiled classes.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<tempfile::TempDir>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(sources) = java_sources(temp_dir.path()) {
            for source in sources {
                eprintln!("  {}", source.display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(temp_dir)
}
