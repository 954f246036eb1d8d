//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented source text. AST nodes are applied through
/// [`emit`](Self::emit) or [`apply_fragment`](Self::apply_fragment).
///
/// # Example
///
/// ```
/// use routegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder.push_line("class Foo {").push_indent();
/// builder.push_line("int x;");
/// builder.push_dedent().push_line("}");
///
/// assert_eq!(builder.build(), "class Foo {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line Javadoc comment.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Add a line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Javadoc(text) => {
                self.push_javadoc(&text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Method;

    impl Renderable for Method {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![
                CodeFragment::Javadoc("Looks up a route.".into()),
                CodeFragment::braced(
                    "static void go() {",
                    vec![CodeFragment::Comment("nothing".into())],
                ),
            ]
        }
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::java();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_nested_indent() {
        let mut builder = CodeBuilder::java();
        builder.push_line("class A {").push_indent();
        builder.push_line("void f() {").push_indent();
        builder.push_line("return;");
        builder.push_dedent().push_line("}");
        builder.push_blank();
        builder.push_dedent().push_line("}");

        assert_eq!(builder.build(), "class A {\n  void f() {\n    return;\n  }\n\n}\n");
    }

    #[test]
    fn test_emit_renderable() {
        let mut builder = CodeBuilder::new(Indent::FOUR);
        builder.push_line("class A {").push_indent();
        builder.emit(&Method);
        builder.push_dedent().push_line("}");

        assert_eq!(
            builder.build(),
            "class A {\n    /** Looks up a route. */\n    static void go() {\n        // nothing\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_has_no_indent() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }
}
