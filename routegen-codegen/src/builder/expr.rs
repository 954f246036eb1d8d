//! Language-agnostic expressions and statements.
//!
//! Method bodies are kept as a small expression tree. Each target language
//! renders it through the [`Renderer`] trait, and [`crate::builder::eval`]
//! can execute it directly so generated behavior is checkable without a
//! compiler for the target language.

use routegen_core::TypeToken;
use serde::Serialize;

/// An expression in a generated method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum Expr {
    /// Reference to a method parameter.
    Param { name: String },
    /// String literal (will be quoted and escaped).
    Str { value: String },
    /// Reference to a type as a runtime value (`Foo.class` in Java).
    TypeLiteral { token: TypeToken },
    /// The absent value.
    Null,
    /// Value equality. Never fails on a null right-hand side.
    Equals { left: Box<Expr>, right: Box<Expr> },
    /// `condition ? then : otherwise`
    Conditional {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str {
            value: value.into(),
        }
    }

    pub fn type_literal(token: TypeToken) -> Self {
        Self::TypeLiteral { token }
    }

    pub fn equals(left: Expr, right: Expr) -> Self {
        Self::Equals {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Expr, then: Expr, otherwise: Expr) -> Self {
        Self::Conditional {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }
}

/// A statement in a generated method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Statement {
    /// `return <expr>;`
    Return { value: Expr },
}

impl Statement {
    pub fn ret(value: Expr) -> Self {
        Self::Return { value }
    }
}

/// Renders expressions and statements to a target language.
pub trait Renderer {
    /// Render an expression to a string.
    fn render_expr(&self, expr: &Expr) -> String;

    /// Render a statement to a single line.
    fn render_statement(&self, stmt: &Statement) -> String;
}
