//! Shared naming utilities for Java declarations.

use std::path::PathBuf;

/// Java reserved keywords and literals that cannot be used as identifiers.
/// Source: JLS §3.9 and §3.10.3
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Check if a name is a Java reserved keyword or literal
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore, or dollar sign"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, underscores, and dollar signs");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved keyword");
    }

    None
}

/// Validate a package name. The empty string denotes the default package.
pub fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return None;
    }

    for segment in package.split('.') {
        if segment.is_empty() {
            return Some("package segments cannot be empty");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
    }

    None
}

/// Join a package and a relative name, skipping the dot for the default package.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// Convert a package name to its relative source directory (`a.b.c` -> `a/b/c`).
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}
