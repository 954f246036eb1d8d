//! Compilation rounds and the round environment capability.

use serde::Deserialize;

use crate::Element;

/// Read-only view of the elements visible in one processing round.
///
/// Supplied by the host build before each round.
pub trait RoundEnvironment {
    /// All root elements of this round.
    fn root_elements(&self) -> &[Element];

    /// Whether this is the final round, after which no further rounds run.
    fn processing_over(&self) -> bool;

    /// Elements carrying the given annotation, in declaration order.
    fn elements_annotated_with(&self, annotation_type: &str) -> Vec<&Element> {
        self.root_elements()
            .iter()
            .filter(|e| e.has_annotation(annotation_type))
            .collect()
    }
}

/// One round of declarations as supplied by the host build.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Round {
    /// Elements visible in this round.
    #[serde(default, rename = "element")]
    pub elements: Vec<Element>,

    #[serde(skip)]
    processing_over: bool,
}

impl Round {
    /// Create a round over the given elements.
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            processing_over: false,
        }
    }

    /// The empty final round the host runs once all declared rounds are done.
    pub fn last() -> Self {
        Self {
            elements: Vec::new(),
            processing_over: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl RoundEnvironment for Round {
    fn root_elements(&self) -> &[Element] {
        &self.elements
    }

    fn processing_over(&self) -> bool {
        self.processing_over
    }
}
