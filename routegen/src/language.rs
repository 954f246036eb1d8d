//! Unified language dispatch.
//!
//! Centralizes renderer selection and per-language metadata.

use clap::ValueEnum;
use routegen_codegen::Processor;
use routegen_codegen_java::JavaRenderer;

/// Target language for generated lookup classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    Java,
}

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create a processor rendering this language, claiming `annotation`.
    pub fn processor(&self, annotation: &str) -> Processor {
        let processor = match self.language {
            Language::Java => Processor::new(JavaRenderer::new()),
        };
        processor.annotation(annotation)
    }
}
