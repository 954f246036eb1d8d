//! Java AST builders for generating classes and methods.
//!
//! These provide a high-level API for constructing Java syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod method;

pub use class::Class;
pub use method::{Method, Param};
