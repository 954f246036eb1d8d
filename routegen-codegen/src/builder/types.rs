//! Language-agnostic type system for code generation.
//!
//! Types are represented semantically and rendered per target language via
//! the [`TypeMapper`] trait.

use serde::Serialize;

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A string.
    String,
    /// A runtime type token (`Class<?>` in Java).
    TypeToken,
}

/// Visibility modifier for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    /// No modifier (Java package-private).
    Package,
    Private,
}

/// Maps language-agnostic types to language-specific syntax.
pub trait TypeMapper {
    /// Render a type reference.
    fn map_type(&self, ty: &TypeRef) -> String;

    /// Render a visibility modifier, if the language writes one.
    fn map_visibility(&self, vis: Visibility) -> Option<&'static str>;
}
