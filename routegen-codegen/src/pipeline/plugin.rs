//! Pipeline plugin trait for extensibility.

use std::sync::Arc;

use eyre::Result;

use super::RoundContext;

/// A plugin that can hook into the processing pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the round context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the round.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut RoundContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the round.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut RoundContext<'_>) -> Result<()> {
        Ok(())
    }
}

/// Shared plugins, so the caller can keep a handle and read results later.
impl<P: Plugin + ?Sized> Plugin for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut RoundContext<'_>) -> Result<()> {
        (**self).on_before_phase(phase, ctx)
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut RoundContext<'_>) -> Result<()> {
        (**self).on_after_phase(phase, ctx)
    }
}
