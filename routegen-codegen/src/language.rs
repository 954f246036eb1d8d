//! The seam between the pipeline and a target language.

use crate::ArtifactSpec;

/// Turns an [`ArtifactSpec`] into source text for one language.
pub trait ArtifactRenderer: Send + Sync {
    /// Language name (e.g. "java").
    fn language(&self) -> &'static str;

    /// File extension without the dot.
    fn file_extension(&self) -> &'static str;

    /// Render the complete compilation unit.
    fn render(&self, artifact: &ArtifactSpec) -> String;

    /// File name of the compilation unit.
    fn file_name(&self, artifact: &ArtifactSpec) -> String {
        format!("{}.{}", artifact.target_file_name, self.file_extension())
    }
}
