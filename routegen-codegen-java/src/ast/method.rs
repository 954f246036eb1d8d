//! Java method builder.

use routegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Builder for Java methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    modifiers: Vec<String>,
    return_type: String,
    params: Vec<Param>,
    body: Vec<String>,
}

impl Method {
    /// Create a method returning `void` with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            modifiers: Vec::new(),
            return_type: "void".to_string(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a modifier (`public`, `static`, ...). Modifiers render in the
    /// order they are added.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut parts = self.modifiers.clone();
        parts.push(self.return_type.clone());
        format!("{} {}({}) {{", parts.join(" "), self.name, params)
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Javadoc(doc.clone()));
        }

        fragments.push(CodeFragment::braced(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_method() {
        let m = Method::new("run").build();
        assert_eq!(m, "void run() {\n}\n");
    }

    #[test]
    fn test_static_method_with_params() {
        let m = Method::new("find")
            .modifier("public")
            .modifier("static")
            .returns("Class<?>")
            .param(Param::new("String", "path"))
            .param(Param::new("int", "depth"))
            .body_line("return null;")
            .build();

        assert_eq!(
            m,
            "public static Class<?> find(String path, int depth) {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_method_doc() {
        let m = Method::new("run").doc("Runs.").build();
        assert!(m.starts_with("/** Runs. */\n"));
    }
}
