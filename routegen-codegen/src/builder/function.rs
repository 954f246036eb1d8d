//! Language-agnostic method definitions.

use serde::Serialize;

use super::{
    expr::Statement,
    types::{TypeRef, Visibility},
};

/// A declarative specification for a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Return type (None for void).
    pub return_type: Option<TypeRef>,
    /// Method body as statements.
    pub body: Vec<Statement>,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether this is a static (type-level) method.
    pub is_static: bool,
}

impl MethodSpec {
    /// Create a new public instance method spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Make this a static method.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
