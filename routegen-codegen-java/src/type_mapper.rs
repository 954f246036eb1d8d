//! Java type mapper implementation.

use routegen_codegen::builder::{TypeMapper, TypeRef, Visibility};

/// Maps language-agnostic types to Java syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "String".to_string(),
            TypeRef::TypeToken => "Class<?>".to_string(),
        }
    }

    fn map_visibility(&self, vis: Visibility) -> Option<&'static str> {
        match vis {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Package => None,
            Visibility::Private => Some("private"),
        }
    }
}
