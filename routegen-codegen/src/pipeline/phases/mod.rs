//! Built-in pipeline phases, in execution order:
//!
//! - [`ScanPhase`] - finds annotated elements and builds descriptors
//! - [`ValidatePhase`] - rejects descriptors that cannot be generated
//! - [`GeneratePhase`] - builds one artifact spec per valid descriptor
//! - [`EmitPhase`] - renders and writes each artifact

mod emit;
mod generate;
mod scan;
mod validate;

pub use emit::{EmitPhase, emit};
pub use generate::{GeneratePhase, generate};
pub use scan::{ScanPhase, scan};
pub use validate::{Check, ElementKindCheck, EmptyPathCheck, IdentifierCheck, ValidatePhase, validate};
