//! Validation context and utilities for declaration parsing.

use std::sync::Arc;

use miette::SourceSpan;
use routegen_core::{is_java_keyword, validate_identifier, validate_package};

use crate::{Element, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content for span lookups plus a path of segments
/// describing where in the declarations we are (e.g. `round 2`), which is
/// used to phrase error messages.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["round 1", "MainActivity"])
    path: Vec<String>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path joined with `, `.
    pub fn path_string(&self) -> String {
        self.path.join(", ")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "element name in 'round 1'" or just "element name".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a name is a valid Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a package name (empty means the default package).
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if let Some(reason) = validate_package(package) {
            return Err(self.source.invalid_package_error(
                package,
                reason,
                self.find_span(package),
            ));
        }
        Ok(())
    }

    /// Validate the names of a declared element.
    pub fn validate_element(&self, element: &Element) -> Result<()> {
        self.validate_package(&element.package)?;
        self.validate_name(&element.name, "element name")?;

        let ctx = self.push(element.name.as_str());
        for outer in &element.enclosing {
            ctx.validate_name(outer, "enclosing type")?;
        }

        Ok(())
    }
}

/// Find the span of a string value in the TOML source.
/// Searches for the quoted form first (`"value"`), then falls back to a bare match.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}
