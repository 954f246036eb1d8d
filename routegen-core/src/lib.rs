//! Core types and utilities for the routegen route processor.
//!
//! This crate provides the types shared by the declaration model and the
//! code generators: element kinds, portable type tokens, Java naming rules
//! and the file-creation capability generated sources are written through.

mod file;
mod types;
mod utils;

// File output
pub use file::{DirFiler, Filer, MemoryFiler, unit_path};
// Fundamental types
pub use types::{ElementKind, TypeToken};
// Naming utilities
pub use utils::{
    JAVA_KEYWORDS, is_java_keyword, package_dir, qualify, validate_identifier, validate_package,
};
