use super::super::Check;
use crate::{ProcessError, RouteDescriptor};

/// Only plain classes can be routed.
pub struct ElementKindCheck;

impl Check for ElementKindCheck {
    fn name(&self) -> &'static str {
        "element-kind"
    }

    fn description(&self) -> &'static str {
        "Check the annotated element is a class"
    }

    fn check(&self, descriptor: &RouteDescriptor) -> Result<(), ProcessError> {
        if descriptor.element.kind.is_class() {
            return Ok(());
        }

        Err(ProcessError::UnsupportedElementKind {
            element: descriptor.qualified_name(),
            kind: descriptor.element.kind,
            location: descriptor.location.clone(),
        })
    }
}
