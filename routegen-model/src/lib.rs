//! Declaration model for the routegen route processor.
//!
//! The host build describes what the processor sees as a TOML declarations
//! file: the options it passes, the annotation to claim, and one or more
//! rounds of declared elements with their annotations.
//!
//! ```toml
//! [options]
//! content = "hello"
//!
//! [[round]]
//! [[round.element]]
//! package = "com.example"
//! name = "MainActivity"
//! annotations = [{ type = "ARouter", path = "/app/MainActivity" }]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod declarations;
mod element;
mod error;
mod file;
mod options;
mod parse;
mod round;
mod validate;

pub use declarations::Declarations;
pub use element::{AnnotationMirror, AnnotationValue, Element};
pub use error::{Error, Result};
pub use file::DeclarationsFile;
pub use options::{CONTENT_OPTION, DEFAULT_ROUTE_ANNOTATION, Options, ProcessorConfig};
pub use parse::{DEFAULT_FILENAME, parse_declarations};
pub use round::{Round, RoundEnvironment};
pub use routegen_core::ElementKind;
pub use validate::ParseContext;
