//! Emit phase - renders artifacts and writes them through the filer.

use std::io::Write;

use eyre::Result;
use routegen_core::{Filer, unit_path};

use crate::{
    ArtifactSpec, ProcessError,
    language::ArtifactRenderer,
    pipeline::{EmittedUnit, Phase, RoundContext},
};

/// Render one artifact and write it as a new compilation unit.
///
/// Flushing commits the unit. If writing or flushing fails the unit is not
/// kept, and the failure is returned as [`ProcessError::Io`].
pub fn emit(
    artifact: &ArtifactSpec,
    renderer: &dyn ArtifactRenderer,
    filer: &mut dyn Filer,
) -> Result<EmittedUnit, ProcessError> {
    let file_name = renderer.file_name(artifact);
    let content = renderer.render(artifact);

    let io_error = |source| ProcessError::Io {
        unit: unit_path(&artifact.package_name, &file_name),
        location: artifact.source_location.clone(),
        source,
    };

    let mut sink = filer
        .create_compilation_unit(&artifact.package_name, &file_name)
        .map_err(io_error)?;
    sink.write_all(content.as_bytes()).map_err(io_error)?;
    sink.flush().map_err(io_error)?;
    drop(sink);

    Ok(EmittedUnit {
        package: artifact.package_name.clone(),
        file_name,
        qualified_name: artifact.qualified_name(),
    })
}

/// Phase that emits every generated artifact.
pub struct EmitPhase<'r> {
    renderer: &'r dyn ArtifactRenderer,
}

impl<'r> EmitPhase<'r> {
    pub fn new(renderer: &'r dyn ArtifactRenderer) -> Self {
        Self { renderer }
    }
}

impl Phase for EmitPhase<'_> {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Render each artifact and write it as a compilation unit"
    }

    fn run(&self, ctx: &mut RoundContext<'_>) -> Result<()> {
        for artifact in &ctx.artifacts {
            match emit(artifact, self.renderer, &mut *ctx.filer) {
                Ok(unit) => {
                    tracing::debug!(unit = %unit.qualified_name, "emitted");
                    ctx.emitted.push(unit);
                }
                Err(err) => ctx.diagnostics.push(err.to_diagnostic(self.name())),
            }
        }
        Ok(())
    }
}
