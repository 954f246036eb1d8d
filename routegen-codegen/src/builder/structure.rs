//! Language-agnostic type declarations.

use serde::Serialize;

use super::{function::MethodSpec, types::Visibility};

/// A declarative specification for a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    /// Simple name of the class.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Methods in declaration order.
    pub methods: Vec<MethodSpec>,
}

impl TypeSpec {
    /// Create a new public class spec.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            visibility: Visibility::Public,
            methods: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Find a method by name.
    pub fn find_method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }
}
