use routegen_core::{validate_identifier, validate_package};

use super::super::Check;
use crate::{ProcessError, RouteDescriptor};

/// The generated router is declared in the target's package and named after
/// it, so both must be usable Java names.
pub struct IdentifierCheck;

impl Check for IdentifierCheck {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn description(&self) -> &'static str {
        "Check the package and type name are valid Java identifiers"
    }

    fn check(&self, descriptor: &RouteDescriptor) -> Result<(), ProcessError> {
        let invalid = validate_package(&descriptor.package_name)
            .map(|reason| (&descriptor.package_name, reason))
            .or_else(|| {
                validate_identifier(&descriptor.simple_type_name)
                    .map(|reason| (&descriptor.simple_type_name, reason))
            });

        match invalid {
            None => Ok(()),
            Some((name, reason)) => Err(ProcessError::InvalidIdentifier {
                element: descriptor.qualified_name(),
                name: name.clone(),
                reason,
                location: descriptor.location.clone(),
            }),
        }
    }
}
