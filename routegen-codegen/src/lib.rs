//! Route processing pipeline for routegen.
//!
//! This crate turns the declarations visible in a processing round into
//! companion lookup classes. It is independent of the target language;
//! renderers such as `routegen-codegen-java` plug in through
//! [`ArtifactRenderer`].
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, TypeSpec, Expr, ...)
//! - [`pipeline`] - Phases, diagnostics, plugins and the [`Processor`] driver
//! - [`naming`] - Artifact naming conventions
//! - [`testing`] - Test utilities (feature-gated)

mod artifact;
pub mod builder;
mod descriptor;
mod error;
mod language;
pub mod naming;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use artifact::{ArtifactSpec, BodyFacts};
pub use descriptor::RouteDescriptor;
pub use error::ProcessError;
pub use language::ArtifactRenderer;
pub use pipeline::{
    Diagnostic, Messager, Processor, ProcessorState, Severity,
    phases::{emit, generate, scan, validate},
};
