//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the round state after each phase so the pipeline can be
//! inspected with `routegen process --visualize <dir>`.

use std::{
    fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use serde::Serialize;

use super::{Diagnostic, EmittedUnit, Plugin, RoundContext};
use crate::{ArtifactSpec, RouteDescriptor};

/// A snapshot of the round state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub round: usize,
    /// The phase that just completed.
    pub phase: String,
    pub descriptors: Vec<RouteDescriptor>,
    pub validated: Vec<RouteDescriptor>,
    pub artifacts: Vec<ArtifactSpec>,
    pub emitted: Vec<EmittedUnit>,
    /// Diagnostics collected so far in this round.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    /// File name used when writing this snapshot (e.g. `round-1-scan.json`).
    pub fn file_name(&self) -> String {
        format!("round-{}-{}.json", self.round, self.phase)
    }
}

/// A plugin that captures round state after each phase.
///
/// # Example
///
/// ```ignore
/// let snapshots = Arc::new(SnapshotPlugin::new());
/// let mut processor = Processor::new(JavaRenderer::new()).plugin(snapshots.clone());
/// // ... run rounds ...
/// snapshots.write_to_dir(".routegen/debug")?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            let json = serde_json::to_string_pretty(snapshot)?;
            fs::write(dir.join(snapshot.file_name()), json)?;
        }

        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &RoundContext<'_>) {
        let snapshot = PhaseSnapshot {
            round: ctx.round,
            phase: phase.to_string(),
            descriptors: ctx.descriptors.clone(),
            validated: ctx.validated.clone(),
            artifacts: ctx.artifacts.clone(),
            emitted: ctx.emitted.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut RoundContext<'_>) -> Result<()> {
        self.capture_snapshot(phase, ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use routegen_core::MemoryFiler;
    use routegen_model::Round;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_written_to_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("debug");
        let plugin = SnapshotPlugin::new();
        let round = Round::default();
        let mut filer = MemoryFiler::new();
        let mut ctx = RoundContext::new(2, "ARouter", &round, &mut filer);
        ctx.add_diagnostic(Diagnostic::info("scan", "nothing"));

        plugin.on_after_phase("scan", &mut ctx).unwrap();
        plugin.on_after_phase("validate", &mut ctx).unwrap();
        assert!(!out.exists());

        plugin.write_to_dir(&out).unwrap();

        assert!(out.join("round-2-validate.json").exists());
        let json = fs::read_to_string(out.join("round-2-scan.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["round"], 2);
        assert_eq!(value["phase"], "scan");
        assert_eq!(value["diagnostics"][0]["message"], "nothing");
        assert_eq!(plugin.snapshots().len(), 2);
    }
}
