//! Java class builder.

use routegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Method;

/// Builder for top-level Java classes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    modifiers: Vec<String>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            modifiers: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    fn header(&self) -> String {
        let mut parts = self.modifiers.clone();
        parts.push("class".to_string());
        parts.push(self.name.clone());
        format!("{} {{", parts.join(" "))
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(method.to_fragments());
        }
        fragments
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Javadoc(doc.clone()));
        }

        fragments.push(CodeFragment::braced(
            self.header(),
            self.methods_to_fragments(),
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class() {
        let c = Class::new("Foo").modifier("public").build();
        assert_eq!(c, "public class Foo {\n}\n");
    }

    #[test]
    fn test_class_with_methods() {
        let c = Class::new("Foo")
            .doc("A foo.")
            .method(Method::new("a").body_line("return;"))
            .method(Method::new("b"))
            .build();

        assert_eq!(
            c,
            "/** A foo. */\nclass Foo {\n  void a() {\n    return;\n  }\n\n  void b() {\n  }\n}\n"
        );
    }
}
