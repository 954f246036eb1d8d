//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//!
//! # Declarative Type Specifications
//!
//! - [`TypeSpec`], [`MethodSpec`] - Class and method definitions
//! - [`Expr`], [`Statement`] - Method bodies
//! - [`TypeRef`] - Language-agnostic type references
//! - [`TypeMapper`], [`Renderer`] - Traits for language-specific rendering

mod code_builder;
pub mod eval;
mod expr;
mod function;
mod indent;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use expr::{Expr, Renderer, Statement};
pub use function::{MethodSpec, ParamSpec};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::TypeSpec;
pub use types::{TypeMapper, TypeRef, Visibility};
