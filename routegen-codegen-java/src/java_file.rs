//! JavaFile abstraction for structured Java compilation units.

use routegen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of one Java compilation unit: an optional
/// header comment, the package declaration and the top-level types.
///
/// # Example
///
/// ```
/// use routegen_codegen_java::{JavaFile, ast::Class};
///
/// let source = JavaFile::new("com.example")
///     .add(Class::new("Foo").modifier("public"))
///     .render();
///
/// assert_eq!(source, "package com.example;\n\npublic class Foo {\n}\n");
/// ```
#[derive(Debug, Default)]
pub struct JavaFile {
    header: Option<String>,
    package: String,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    /// Create a compilation unit in `package` (empty for the default package).
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Set a line comment placed above the package declaration.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with JavaPoet-style two-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(header) = &self.header {
            builder.push_comment(header);
            sections += 1;
        }

        if !self.package.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            builder.push_line(&format!("package {};", self.package));
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }
}
