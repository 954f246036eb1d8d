//! Validate phase - rejects descriptors that cannot be generated.

mod check;
mod checks;

pub use check::Check;
pub use checks::{ElementKindCheck, EmptyPathCheck, IdentifierCheck};
use eyre::Result;

use crate::{
    ProcessError, RouteDescriptor,
    pipeline::{Phase, RoundContext},
};

/// Validate a descriptor against the built-in checks.
///
/// Checks run in order (element kind, path, then identifiers) and the first
/// failure is returned. On success the descriptor comes back unchanged.
pub fn validate(descriptor: RouteDescriptor) -> Result<RouteDescriptor, ProcessError> {
    ValidatePhase::new().validate(descriptor)
}

/// Phase that validates scanned descriptors using configurable checks.
pub struct ValidatePhase {
    checks: Vec<Box<dyn Check>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the built-in checks.
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(ElementKindCheck),
                Box::new(EmptyPathCheck),
                Box::new(IdentifierCheck),
            ],
        }
    }

    /// Run all checks on one descriptor.
    pub fn validate(&self, descriptor: RouteDescriptor) -> Result<RouteDescriptor, ProcessError> {
        for check in &self.checks {
            check.check(&descriptor)?;
        }
        Ok(descriptor)
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Reject descriptors that cannot produce a router"
    }

    fn run(&self, ctx: &mut RoundContext<'_>) -> Result<()> {
        let mut validated = Vec::with_capacity(ctx.descriptors.len());

        for descriptor in ctx.descriptors.iter().cloned() {
            match self.validate(descriptor) {
                Ok(descriptor) => validated.push(descriptor),
                Err(err) => {
                    tracing::debug!(location = err.location(), "rejected descriptor: {}", err);
                    ctx.diagnostics.push(err.to_diagnostic(self.name()));
                }
            }
        }

        ctx.validated = validated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use routegen_core::{ElementKind, TypeToken};

    use super::*;

    fn descriptor(kind: ElementKind, path: &str) -> RouteDescriptor {
        RouteDescriptor {
            package_name: "p".into(),
            simple_type_name: "Foo".into(),
            path: path.into(),
            element: TypeToken::new("p", "Foo", kind),
            location: "Foo.java:1".into(),
        }
    }

    #[test]
    fn test_valid_descriptor_unchanged() {
        let d = descriptor(ElementKind::Class, "/app/Foo");
        assert_eq!(validate(d.clone()).unwrap(), d);
    }

    #[test]
    fn test_empty_path() {
        let err = validate(descriptor(ElementKind::Class, "")).unwrap_err();
        assert!(matches!(err, ProcessError::EmptyPath { .. }));
    }

    #[test]
    fn test_whitespace_path_is_not_empty() {
        assert!(validate(descriptor(ElementKind::Class, " ")).is_ok());
    }

    #[test]
    fn test_unsupported_kind() {
        let err = validate(descriptor(ElementKind::Interface, "/app/Foo")).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::UnsupportedElementKind {
                kind: ElementKind::Interface,
                ..
            }
        ));
    }

    #[test]
    fn test_kind_checked_before_path() {
        let err = validate(descriptor(ElementKind::Method, "")).unwrap_err();
        assert!(matches!(err, ProcessError::UnsupportedElementKind { .. }));
    }

    #[test]
    fn test_invalid_type_name() {
        let mut d = descriptor(ElementKind::Class, "/app/Foo");
        d.simple_type_name = "Foo Bar".into();

        let err = validate(d).unwrap_err();
        assert!(matches!(err, ProcessError::InvalidIdentifier { ref name, .. } if name == "Foo Bar"));
        assert_eq!(
            err.to_string(),
            "'Foo Bar' in 'p.Foo' is not a valid Java identifier: \
             name must contain only letters, digits, underscores, and dollar signs"
        );
    }

    #[test]
    fn test_invalid_package() {
        let mut d = descriptor(ElementKind::Class, "/app/Foo");
        d.package_name = "com..example".into();
        assert!(matches!(
            validate(d).unwrap_err(),
            ProcessError::InvalidIdentifier { reason: "package segments cannot be empty", .. }
        ));

        let mut keyword = descriptor(ElementKind::Class, "/app/Foo");
        keyword.simple_type_name = "class".into();
        assert!(validate(keyword).is_err());
    }

    #[test]
    fn test_path_checked_before_identifier() {
        let mut d = descriptor(ElementKind::Class, "");
        d.simple_type_name = "1Foo".into();
        assert!(matches!(validate(d).unwrap_err(), ProcessError::EmptyPath { .. }));
    }
}
