use routegen_core::TypeToken;
use routegen_model::{AnnotationMirror, Element};
use serde::Serialize;

use crate::naming::PATH_ATTRIBUTE;

/// One discovered route: a declaration carrying the routing annotation.
///
/// Created by the scanner once per element per round and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Package of the annotated type, empty for the default package.
    pub package_name: String,
    /// Simple name of the annotated type.
    pub simple_type_name: String,
    /// The annotation's `path` attribute, verbatim. Empty when the attribute
    /// is missing or not a string.
    pub path: String,
    /// Portable token for the annotated type.
    pub element: TypeToken,
    /// Where the declaration lives, for diagnostics.
    pub location: String,
}

impl RouteDescriptor {
    /// Project an element and its routing annotation into a descriptor.
    pub fn from_element(element: &Element, annotation: &AnnotationMirror) -> Self {
        Self {
            package_name: element.package.clone(),
            simple_type_name: element.name.clone(),
            path: annotation
                .string(PATH_ATTRIBUTE)
                .unwrap_or_default()
                .to_string(),
            element: element.type_token(),
            location: element.location(),
        }
    }

    /// Fully qualified name of the annotated type.
    pub fn qualified_name(&self) -> String {
        self.element.qualified_name()
    }
}
