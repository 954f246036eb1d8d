//! Scan phase - projects annotated elements into descriptors.

use eyre::Result;
use routegen_model::RoundEnvironment;

use crate::{
    RouteDescriptor,
    pipeline::{Diagnostic, Phase, RoundContext},
};

/// Find every element carrying `annotation` and describe it.
///
/// Paths are taken verbatim. Nothing is deduplicated or validated here.
pub fn scan(environment: &dyn RoundEnvironment, annotation: &str) -> Vec<RouteDescriptor> {
    environment
        .elements_annotated_with(annotation)
        .into_iter()
        .filter_map(|element| {
            element
                .annotation(annotation)
                .map(|mirror| RouteDescriptor::from_element(element, mirror))
        })
        .collect()
}

/// Phase that scans the round's elements.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Find elements carrying the route annotation"
    }

    fn run(&self, ctx: &mut RoundContext<'_>) -> Result<()> {
        let descriptors = scan(ctx.environment, ctx.annotation);

        for descriptor in &descriptors {
            ctx.diagnostics.push(
                Diagnostic::info(
                    self.name(),
                    format!("found route target {}", descriptor.simple_type_name),
                )
                .at(&descriptor.location),
            );
        }

        tracing::debug!(count = descriptors.len(), "scanned round");
        ctx.descriptors = descriptors;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use routegen_model::{AnnotationMirror, Element, Round};

    use super::*;

    const ANNOTATION: &str = "com.vanelst.annotation.ARouter";

    fn routed(name: &str, path: &str) -> Element {
        Element::class("p", name).annotated(AnnotationMirror::new(ANNOTATION).value("path", path))
    }

    #[test]
    fn test_scan_empty_round() {
        assert!(scan(&Round::default(), ANNOTATION).is_empty());
    }

    #[test]
    fn test_scan_keeps_order_and_duplicates() {
        let round = Round::new([
            routed("A", "/x/same"),
            Element::class("p", "Plain"),
            routed("B", "/x/same"),
        ]);

        let descriptors = scan(&round, ANNOTATION);
        let names: Vec<_> = descriptors.iter().map(|d| d.simple_type_name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(descriptors.iter().all(|d| d.path == "/x/same"));
    }

    #[test]
    fn test_scan_matches_simple_annotation_name() {
        let round = Round::new([Element::class("p", "A")
            .annotated(AnnotationMirror::new("ARouter").value("path", "/a"))]);

        assert_eq!(scan(&round, ANNOTATION).len(), 1);
    }

    #[test]
    fn test_scan_path_not_normalized() {
        let round = Round::new([routed("A", "app/A/ ")]);
        assert_eq!(scan(&round, ANNOTATION)[0].path, "app/A/ ");
    }
}
