//! Round processing pipeline.
//!
//! A [`Processor`] runs the built-in phases once per round
//! (scan → validate → generate → emit) over a fresh [`RoundContext`]. The
//! pipeline provides:
//!
//! - Explicit phase boundaries
//! - Plugin hooks for extensibility (before/after each phase)
//! - Per-round diagnostics, forwarded to the host's [`Messager`]
//!
//! # Example
//!
//! ```ignore
//! let mut processor = Processor::new(JavaRenderer::new());
//! let mut diagnostics = Vec::new();
//!
//! processor.init(&options, &mut diagnostics)?;
//! for round in &declarations.rounds {
//!     processor.process(round, &mut filer, &mut diagnostics)?;
//! }
//! processor.process(&Round::last(), &mut filer, &mut diagnostics)?;
//! processor.finish()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod processor;
mod snapshot;

pub use context::{EmittedUnit, RoundContext};
pub use diagnostic::{Diagnostic, Messager, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use processor::{Processor, ProcessorState};
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
