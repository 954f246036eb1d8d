use super::super::Check;
use crate::{ProcessError, RouteDescriptor};

/// The route path must be present and non-empty.
///
/// Whitespace-only paths are accepted as written.
pub struct EmptyPathCheck;

impl Check for EmptyPathCheck {
    fn name(&self) -> &'static str {
        "empty-path"
    }

    fn description(&self) -> &'static str {
        "Check the route path is not empty"
    }

    fn check(&self, descriptor: &RouteDescriptor) -> Result<(), ProcessError> {
        if !descriptor.path.is_empty() {
            return Ok(());
        }

        Err(ProcessError::EmptyPath {
            element: descriptor.qualified_name(),
            location: descriptor.location.clone(),
        })
    }
}
