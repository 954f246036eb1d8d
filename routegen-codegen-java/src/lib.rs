//! Java rendering for routegen.
//!
//! [`JavaRenderer`] implements [`routegen_codegen::ArtifactRenderer`] and
//! turns each artifact into a `<Simple>$ARouter.java` compilation unit.

mod generator;
mod java_file;
mod render;
mod type_mapper;

pub mod ast;

pub use generator::{GENERATED_HEADER, JavaRenderer};
pub use java_file::JavaFile;
pub use render::{JavaExprRenderer, string_literal};
pub use type_mapper::JavaTypeMapper;
