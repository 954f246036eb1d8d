use routegen_codegen::{
    ArtifactRenderer, ArtifactSpec,
    builder::{MethodSpec, Renderer, TypeMapper, TypeSpec},
};

use crate::{
    JavaExprRenderer, JavaFile, JavaTypeMapper,
    ast::{Class, Method, Param},
};

/// Header comment written at the top of every generated file.
pub const GENERATED_HEADER: &str = "Generated by routegen. Do not edit.";

/// Renders route artifacts as Java source files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer {
    types: JavaTypeMapper,
}

impl JavaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn class(&self, spec: &TypeSpec, exprs: &JavaExprRenderer<'_>) -> Class {
        let mut class = Class::new(&spec.name);
        if let Some(doc) = &spec.doc {
            class = class.doc(doc);
        }
        if let Some(vis) = self.types.map_visibility(spec.visibility) {
            class = class.modifier(vis);
        }

        spec.methods
            .iter()
            .fold(class, |class, method| class.method(self.method(method, exprs)))
    }

    fn method(&self, spec: &MethodSpec, exprs: &JavaExprRenderer<'_>) -> Method {
        let mut method = Method::new(&spec.name);
        if let Some(doc) = &spec.doc {
            method = method.doc(doc);
        }
        if let Some(vis) = self.types.map_visibility(spec.visibility) {
            method = method.modifier(vis);
        }
        if spec.is_static {
            method = method.modifier("static");
        }
        if let Some(ty) = &spec.return_type {
            method = method.returns(self.types.map_type(ty));
        }

        let method = spec.params.iter().fold(method, |method, param| {
            method.param(Param::new(self.types.map_type(&param.ty), &param.name))
        });

        spec.body.iter().fold(method, |method, stmt| {
            method.body_line(exprs.render_statement(stmt))
        })
    }
}

impl ArtifactRenderer for JavaRenderer {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, artifact: &ArtifactSpec) -> String {
        let exprs = JavaExprRenderer::new(&artifact.package_name);

        JavaFile::new(&artifact.package_name)
            .header(GENERATED_HEADER)
            .add(self.class(&artifact.type_spec, &exprs))
            .render()
    }
}
