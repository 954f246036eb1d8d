//! Java-specific rendering of expressions and literals.

use routegen_codegen::builder::{Expr, Renderer, Statement};
use routegen_core::TypeToken;

/// Quote and escape a string as a Java string literal.
///
/// Control characters without a short escape are written as `\uXXXX`.
/// Newlines and carriage returns always use their short escapes, since a
/// unicode-escaped line terminator would end the literal.
///
/// ```
/// use routegen_codegen_java::string_literal;
///
/// assert_eq!(string_literal("/app/Main"), "\"/app/Main\"");
/// assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
/// ```
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders expressions as seen from a compilation unit in `package`.
///
/// Types in the same package are written relative to it
/// (`Outer.Inner`), others fully qualified.
#[derive(Debug, Clone, Copy)]
pub struct JavaExprRenderer<'a> {
    package: &'a str,
}

impl<'a> JavaExprRenderer<'a> {
    pub fn new(package: &'a str) -> Self {
        Self { package }
    }

    fn type_name(&self, token: &TypeToken) -> String {
        if token.package == self.package {
            token.relative_name()
        } else {
            token.qualified_name()
        }
    }

    fn operand(&self, expr: &Expr) -> String {
        match expr {
            Expr::Conditional { .. } => format!("({})", self.render_expr(expr)),
            _ => self.render_expr(expr),
        }
    }
}

impl Renderer for JavaExprRenderer<'_> {
    fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Param { name } => name.clone(),
            Expr::Str { value } => string_literal(value),
            Expr::TypeLiteral { token } => format!("{}.class", self.type_name(token)),
            Expr::Null => "null".to_string(),
            // The left operand is the receiver and must never be null.
            Expr::Equals { left, right } => {
                format!("{}.equals({})", self.operand(left), self.render_expr(right))
            }
            Expr::Conditional {
                condition,
                then,
                otherwise,
            } => format!(
                "{} ? {} : {}",
                self.operand(condition),
                self.operand(then),
                self.operand(otherwise)
            ),
        }
    }

    fn render_statement(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::Return { value } => format!("return {};", self.render_expr(value)),
        }
    }
}
