//! Declared elements and the annotations attached to them.

use indexmap::IndexMap;
use routegen_core::{ElementKind, TypeToken, qualify};
use serde::Deserialize;

/// A declared program element visible to the processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    /// Enclosing package, empty for the default package.
    #[serde(default)]
    pub package: String,

    /// Simple name of the element.
    pub name: String,

    /// Element kind (defaults to `class`).
    #[serde(default)]
    pub kind: ElementKind,

    /// Outer type names for nested declarations, outermost first.
    #[serde(default)]
    pub enclosing: Vec<String>,

    /// Source location used in diagnostics (e.g. `src/Foo.java:12`).
    #[serde(default)]
    pub source: Option<String>,

    /// Annotations placed on this element.
    #[serde(default)]
    pub annotations: Vec<AnnotationMirror>,
}

impl Element {
    /// Create a top-level class element without annotations.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            kind: ElementKind::Class,
            enclosing: Vec::new(),
            source: None,
            annotations: Vec::new(),
        }
    }

    /// Set the element kind.
    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the outer type names.
    pub fn nested_in(mut self, enclosing: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enclosing = enclosing.into_iter().map(Into::into).collect();
        self
    }

    /// Set the source location.
    pub fn at(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach an annotation.
    pub fn annotated(mut self, annotation: AnnotationMirror) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Portable token for this element's type.
    pub fn type_token(&self) -> TypeToken {
        TypeToken::new(&self.package, &self.name, self.kind).nested_in(&self.enclosing)
    }

    /// Fully qualified name, including enclosing types.
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = self.enclosing.iter().map(String::as_str).collect();
        parts.push(&self.name);
        qualify(&self.package, &parts.join("."))
    }

    /// Location for diagnostics: the source position if known, otherwise the
    /// qualified name.
    pub fn location(&self) -> String {
        self.source.clone().unwrap_or_else(|| self.qualified_name())
    }

    /// Find the annotation of the given type.
    pub fn annotation(&self, annotation_type: &str) -> Option<&AnnotationMirror> {
        self.annotations.iter().find(|a| a.is(annotation_type))
    }

    /// Check whether the element carries the given annotation.
    pub fn has_annotation(&self, annotation_type: &str) -> bool {
        self.annotation(annotation_type).is_some()
    }
}

/// An annotation as written on an element, with its attribute values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnnotationMirror {
    /// Annotation type, qualified (`com.example.ARouter`) or simple (`ARouter`).
    #[serde(rename = "type")]
    pub annotation_type: String,

    /// Attribute values in declaration order.
    #[serde(flatten)]
    pub values: IndexMap<String, AnnotationValue>,
}

impl AnnotationMirror {
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            values: IndexMap::new(),
        }
    }

    /// Set an attribute value.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get a string attribute, if present and a string.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AnnotationValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Check whether this annotation is of the given type.
    ///
    /// Qualified names must match exactly. When either side is written
    /// unqualified, the simple names are compared instead.
    pub fn is(&self, annotation_type: &str) -> bool {
        if self.annotation_type == annotation_type {
            return true;
        }

        let qualified = |name: &str| name.contains('.');
        if qualified(&self.annotation_type) && qualified(annotation_type) {
            return false;
        }

        simple_name(&self.annotation_type) == simple_name(annotation_type)
    }
}

fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// An annotation attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<AnnotationValue>),
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_matching() {
        let qualified = AnnotationMirror::new("com.vanelst.annotation.ARouter");
        let simple = AnnotationMirror::new("ARouter");

        assert!(qualified.is("com.vanelst.annotation.ARouter"));
        assert!(qualified.is("ARouter"));
        assert!(simple.is("com.vanelst.annotation.ARouter"));
        assert!(!qualified.is("other.ARouter"));
        assert!(!simple.is("Route"));
    }

    #[test]
    fn test_string_attribute() {
        let annotation = AnnotationMirror::new("ARouter")
            .value("path", "/app/Main")
            .value("priority", 3i64);

        assert_eq!(annotation.string("path"), Some("/app/Main"));
        assert_eq!(annotation.string("priority"), None);
        assert_eq!(annotation.string("group"), None);
    }

    #[test]
    fn test_element_names() {
        let element = Element::class("p", "Inner").nested_in(["Outer"]);
        assert_eq!(element.qualified_name(), "p.Outer.Inner");
        assert_eq!(element.location(), "p.Outer.Inner");
        assert_eq!(element.type_token().relative_name(), "Outer.Inner");

        let located = element.at("src/p/Outer.java:7");
        assert_eq!(located.location(), "src/p/Outer.java:7");
    }

    #[test]
    fn test_element_annotation_lookup() {
        let element = Element::class("p", "Foo").annotated(AnnotationMirror::new("Deprecated"));
        assert!(element.has_annotation("Deprecated"));
        assert!(!element.has_annotation("ARouter"));
    }
}
