//! Check trait for descriptor validation.

use crate::{ProcessError, RouteDescriptor};

/// A single validation rule applied to each scanned descriptor.
pub trait Check: Send + Sync {
    /// The name of this check.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this check verifies.
    fn description(&self) -> &'static str;

    /// Check one descriptor.
    fn check(&self, descriptor: &RouteDescriptor) -> Result<(), ProcessError>;
}
