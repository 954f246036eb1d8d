use serde::{Deserialize, Serialize};

/// The kind of a declared program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    /// An annotation type declaration.
    Annotation,
    Field,
    Method,
    Constructor,
    Package,
}

impl ElementKind {
    /// Returns true for plain class declarations.
    pub fn is_class(&self) -> bool {
        matches!(self, ElementKind::Class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Record => "record",
            ElementKind::Annotation => "annotation",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
            ElementKind::Constructor => "constructor",
            ElementKind::Package => "package",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portable reference to a declared type.
///
/// Carries the fully qualified name split into its parts plus the element
/// kind, so generated code can name the type without any live handle into
/// the host compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeToken {
    /// Package name, empty for the default package.
    pub package: String,
    /// Outer type names, outermost first.
    pub enclosing: Vec<String>,
    /// The simple name of the type itself.
    pub simple_name: String,
    pub kind: ElementKind,
}

impl TypeToken {
    /// Create a token for a top-level type.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            package: package.into(),
            enclosing: Vec::new(),
            simple_name: simple_name.into(),
            kind,
        }
    }

    /// Shorthand for a top-level class token.
    pub fn class(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::new(package, simple_name, ElementKind::Class)
    }

    /// Nest this token inside the given outer types.
    pub fn nested_in(mut self, enclosing: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enclosing = enclosing.into_iter().map(Into::into).collect();
        self
    }

    /// The name as written from inside its own package (e.g. `Outer.Inner`).
    pub fn relative_name(&self) -> String {
        let mut parts: Vec<&str> = self.enclosing.iter().map(String::as_str).collect();
        parts.push(&self.simple_name);
        parts.join(".")
    }

    /// The fully qualified name (e.g. `com.example.Outer.Inner`).
    pub fn qualified_name(&self) -> String {
        crate::qualify(&self.package, &self.relative_name())
    }
}

impl std::fmt::Display for TypeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let token = TypeToken::class("com.example", "MainActivity");
        assert_eq!(token.qualified_name(), "com.example.MainActivity");
        assert_eq!(token.relative_name(), "MainActivity");
    }

    #[test]
    fn test_nested_token() {
        let token = TypeToken::class("p", "Inner").nested_in(["Outer"]);
        assert_eq!(token.relative_name(), "Outer.Inner");
        assert_eq!(token.qualified_name(), "p.Outer.Inner");
    }

    #[test]
    fn test_default_package() {
        let token = TypeToken::class("", "Foo");
        assert_eq!(token.qualified_name(), "Foo");
    }

    #[test]
    fn test_kind_helpers() {
        assert!(ElementKind::Class.is_class());
        assert!(!ElementKind::Interface.is_class());
        assert_eq!(ElementKind::Annotation.to_string(), "annotation");
    }
}
