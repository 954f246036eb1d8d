//! The declarations file: everything the host build hands the processor.

use serde::Deserialize;

use crate::{Element, Options, ProcessorConfig, Round};

/// Root of a declarations file (e.g. `routes.toml`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declarations {
    /// Processor configuration
    #[serde(default)]
    pub processor: ProcessorConfig,

    /// Options forwarded to the processor at initialization
    #[serde(default)]
    pub options: Options,

    /// Processing rounds, in order
    #[serde(default, rename = "round")]
    pub rounds: Vec<Round>,
}

impl Declarations {
    /// Iterate over every declared element across all rounds.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.rounds.iter().flat_map(|r| r.elements.iter())
    }

    /// Count the elements carrying the configured routing annotation.
    pub fn annotated_count(&self) -> usize {
        self.elements()
            .filter(|e| e.has_annotation(&self.processor.annotation))
            .count()
    }
}
