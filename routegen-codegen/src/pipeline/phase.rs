//! Pipeline phase trait.

use eyre::Result;

use super::RoundContext;

/// A phase in the processing pipeline.
///
/// Phases run in order once per round: `scan`, `validate`, `generate`,
/// `emit`. Per-descriptor failures are recorded as diagnostics; only fatal
/// problems are returned as errors.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the round context.
    fn run(&self, ctx: &mut RoundContext<'_>) -> Result<()>;
}
