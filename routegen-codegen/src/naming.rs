//! Naming conventions for generated route artifacts.

/// Suffix appended to the simple name of a routed type.
pub const ARTIFACT_SUFFIX: &str = "$ARouter";

/// Name of the generated lookup method.
pub const LOOKUP_METHOD: &str = "findTargetClass";

/// Name of the lookup method's single parameter.
pub const PATH_PARAM: &str = "path";

/// Annotation attribute holding the route path.
pub const PATH_ATTRIBUTE: &str = "path";

/// Artifact type name for a routed type (`MainActivity` -> `MainActivity$ARouter`).
pub fn artifact_name(simple_type_name: &str) -> String {
    format!("{}{}", simple_type_name, ARTIFACT_SUFFIX)
}
