use routegen_core::{TypeToken, qualify};
use serde::Serialize;

use crate::{
    builder::{
        MethodSpec, TypeSpec,
        eval::{self, EvalError, Value},
    },
    naming::LOOKUP_METHOD,
};

/// Everything needed to write one companion source file.
///
/// Derived 1:1 from a validated [`RouteDescriptor`] and consumed once by the
/// emitter.
///
/// [`RouteDescriptor`]: crate::RouteDescriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    /// Type name of the artifact, e.g. `MainActivity$ARouter`.
    pub target_file_name: String,
    pub package_name: String,
    pub facts: BodyFacts,
    /// The generated class.
    pub type_spec: TypeSpec,
    /// Location of the declaration this artifact was generated from.
    pub source_location: String,
}

/// The values baked into the generated lookup method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyFacts {
    pub literal_path: String,
    pub original_type: TypeToken,
}

impl ArtifactSpec {
    /// Fully qualified name of the artifact class.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package_name, &self.target_file_name)
    }

    /// The generated lookup method, if present.
    pub fn lookup_method(&self) -> Option<&MethodSpec> {
        self.type_spec.find_method(LOOKUP_METHOD)
    }

    /// Run the generated lookup for `path` without compiling it.
    ///
    /// Returns the original type token when `path` matches the captured
    /// literal and `None` otherwise.
    pub fn find_target_class<'a>(&'a self, path: &'a str) -> Result<Option<&'a TypeToken>, EvalError> {
        let method = self
            .lookup_method()
            .ok_or_else(|| EvalError::UnknownMethod(LOOKUP_METHOD.to_string()))?;

        match eval::call(method, &[Value::Str(path)])? {
            Value::Type(token) => Ok(Some(token)),
            _ => Ok(None),
        }
    }
}
