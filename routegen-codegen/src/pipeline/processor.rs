//! The processor driver and its lifecycle.

use eyre::{Result, bail};
use routegen_core::Filer;
use routegen_model::{CONTENT_OPTION, DEFAULT_ROUTE_ANNOTATION, Options, Round, RoundEnvironment};

use super::{
    Diagnostic, Messager, Phase, Plugin, RoundContext,
    phases::{EmitPhase, GeneratePhase, ScanPhase, ValidatePhase},
};
use crate::language::ArtifactRenderer;

/// Lifecycle of a [`Processor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    /// Created, not yet initialized.
    Idle,
    /// Options read, no round processed yet.
    Initialized,
    /// The given round (starting at 1) has been processed.
    Processing { round: usize },
    /// No further rounds will run.
    Done,
}

/// Drives the pipeline across the rounds of one build invocation.
///
/// The host calls [`init`](Self::init) once, [`process`](Self::process)
/// once per round, and [`finish`](Self::finish) when it has no more rounds.
/// Calling these out of order is an error.
pub struct Processor {
    annotation: String,
    renderer: Box<dyn ArtifactRenderer>,
    plugins: Vec<Box<dyn Plugin>>,
    state: ProcessorState,
}

impl Processor {
    /// Create a processor for the default route annotation.
    pub fn new(renderer: impl ArtifactRenderer + 'static) -> Self {
        Self {
            annotation: DEFAULT_ROUTE_ANNOTATION.to_string(),
            renderer: Box::new(renderer),
            plugins: Vec::new(),
            state: ProcessorState::Idle,
        }
    }

    /// Process a different annotation type.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Annotation types this processor claims.
    pub fn supported_annotation_types(&self) -> Vec<&str> {
        vec![self.annotation.as_str()]
    }

    /// Options this processor reads.
    pub fn supported_options(&self) -> &'static [&'static str] {
        &[CONTENT_OPTION]
    }

    pub fn state(&self) -> ProcessorState {
        self.state
    }

    /// Read host options. Must be called once, before the first round.
    ///
    /// The `content` option is forwarded as an info note and has no effect
    /// on generation. Options outside [`supported_options`](Self::supported_options)
    /// are reported as warnings and otherwise ignored.
    pub fn init(&mut self, options: &Options, messager: &mut dyn Messager) -> Result<()> {
        if self.state != ProcessorState::Idle {
            bail!("processor is already initialized");
        }

        if let Some(content) = options.get(CONTENT_OPTION) {
            messager.report(Diagnostic::info("init", content));
        }

        for (key, _) in options.iter() {
            if !self.supported_options().iter().any(|supported| *supported == key) {
                messager.report(Diagnostic::warning(
                    "init",
                    format!("unrecognized processor option '{}'", key),
                ));
            }
        }

        tracing::debug!(annotation = %self.annotation, renderer = self.renderer.language(), "processor initialized");
        self.state = ProcessorState::Initialized;
        Ok(())
    }

    /// Process one round.
    ///
    /// Per-descriptor failures are reported through `messager` and skip only
    /// the affected artifact. Returns whether the annotation is claimed,
    /// which is always the case, including for rounds without any annotated
    /// element.
    ///
    /// # Errors
    ///
    /// Returns an error when called before [`init`](Self::init) or after
    /// [`finish`](Self::finish), or when a plugin aborts the round.
    #[tracing::instrument(level = "debug", skip_all, fields(round))]
    pub fn process(
        &mut self,
        environment: &dyn RoundEnvironment,
        filer: &mut dyn Filer,
        messager: &mut dyn Messager,
    ) -> Result<bool> {
        let round = match self.state {
            ProcessorState::Idle => bail!("processor must be initialized before processing"),
            ProcessorState::Done => bail!("processor has already finished"),
            ProcessorState::Initialized => 1,
            ProcessorState::Processing { round } => round + 1,
        };
        tracing::Span::current().record("round", round);
        self.state = ProcessorState::Processing { round };

        let phases: [Box<dyn Phase + '_>; 4] = [
            Box::new(ScanPhase),
            Box::new(ValidatePhase::new()),
            Box::new(GeneratePhase),
            Box::new(EmitPhase::new(self.renderer.as_ref())),
        ];

        let mut ctx = RoundContext::new(round, &self.annotation, environment, filer);
        let result = phases
            .iter()
            .try_for_each(|phase| self.run_phase(phase.as_ref(), &mut ctx));

        tracing::debug!(
            emitted = ctx.emitted.len(),
            errors = ctx.error_count(),
            processing_over = environment.processing_over(),
            "round complete"
        );
        for diagnostic in ctx.diagnostics.drain(..) {
            messager.report(diagnostic);
        }

        result?;
        Ok(true)
    }

    /// Mark the invocation complete. No rounds may follow.
    pub fn finish(&mut self) -> Result<()> {
        match self.state {
            ProcessorState::Idle => bail!("processor was never initialized"),
            ProcessorState::Done => bail!("processor has already finished"),
            ProcessorState::Initialized | ProcessorState::Processing { .. } => {
                self.state = ProcessorState::Done;
                Ok(())
            }
        }
    }

    /// Run a complete invocation the way a host build does: initialize,
    /// process every round, then the empty final round, then finish.
    ///
    /// Returns the number of rounds processed, including the final one.
    pub fn run(
        &mut self,
        options: &Options,
        rounds: &[Round],
        filer: &mut dyn Filer,
        messager: &mut dyn Messager,
    ) -> Result<usize> {
        self.init(options, messager)?;
        for round in rounds {
            self.process(round, filer, messager)?;
        }
        self.process(&Round::last(), filer, messager)?;
        self.finish()?;
        Ok(rounds.len() + 1)
    }

    /// Run a single phase with plugin hooks.
    #[tracing::instrument(level = "debug", skip_all, fields(phase = phase.name()))]
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut RoundContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use routegen_core::MemoryFiler;
    use routegen_model::{AnnotationMirror, Element, ElementKind, Round};

    use super::*;
    use crate::{ArtifactSpec, pipeline::Severity};

    struct PathRenderer;

    impl ArtifactRenderer for PathRenderer {
        fn language(&self) -> &'static str {
            "plain"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, artifact: &ArtifactSpec) -> String {
            artifact.facts.literal_path.clone()
        }
    }

    struct CountingPlugin {
        before: Arc<AtomicUsize>,
        after: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut RoundContext<'_>) -> Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut RoundContext<'_>) -> Result<()> {
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct AbortPlugin;

    impl Plugin for AbortPlugin {
        fn name(&self) -> &'static str {
            "abort"
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut RoundContext<'_>) -> Result<()> {
            if phase == "validate" {
                bail!("stop after validate");
            }
            Ok(())
        }
    }

    /// Memory filer whose sink for one file name rejects every write.
    struct DenyingFiler {
        inner: MemoryFiler,
        denied: &'static str,
    }

    struct DeniedSink;

    impl Write for DeniedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Filer for DenyingFiler {
        fn create_compilation_unit(
            &mut self,
            package: &str,
            file_name: &str,
        ) -> io::Result<Box<dyn Write + '_>> {
            if file_name == self.denied {
                return Ok(Box::new(DeniedSink));
            }
            self.inner.create_compilation_unit(package, file_name)
        }
    }

    fn routed(name: &str, path: &str) -> Element {
        Element::class("p", name)
            .annotated(AnnotationMirror::new(DEFAULT_ROUTE_ANNOTATION).value("path", path))
    }

    fn initialized() -> Processor {
        let mut processor = Processor::new(PathRenderer);
        processor.init(&Options::new(), &mut Vec::<Diagnostic>::new()).unwrap();
        processor
    }

    #[test]
    fn test_init_forwards_content_option() {
        let mut processor = Processor::new(PathRenderer);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let options = Options::new().with("content", "hello from gradle");

        processor.init(&options, &mut diagnostics).unwrap();

        assert_eq!(processor.state(), ProcessorState::Initialized);
        assert_eq!(diagnostics, [Diagnostic::info("init", "hello from gradle")]);
    }

    #[test]
    fn test_init_without_content_is_silent() {
        let mut processor = Processor::new(PathRenderer);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        processor.init(&Options::new(), &mut diagnostics).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_init_warns_on_unrecognized_options() {
        let mut processor = Processor::new(PathRenderer);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let options = Options::new()
            .with("debug", "1")
            .with("content", "hi")
            .with("moduleName", "app");

        processor.init(&options, &mut diagnostics).unwrap();

        assert_eq!(
            diagnostics,
            [
                Diagnostic::info("init", "hi"),
                Diagnostic::warning("init", "unrecognized processor option 'debug'"),
                Diagnostic::warning("init", "unrecognized processor option 'moduleName'"),
            ]
        );
        assert_eq!(processor.state(), ProcessorState::Initialized);
    }

    #[test]
    fn test_invalid_type_name_skips_artifact() {
        let mut processor = initialized();
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let round = Round::new([routed("Foo Bar", "/x/FooBar"), routed("B", "/x/B")]);

        assert!(processor.process(&round, &mut filer, &mut diagnostics).unwrap());

        let units: Vec<_> = filer.units().map(|(path, _)| path).collect();
        assert_eq!(units, ["p/B$ARouter.txt"]);

        let errors: Vec<_> = diagnostics.iter().filter(|d| d.severity.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].phase, "validate");
        assert_eq!(errors[0].location.as_deref(), Some("p.Foo Bar"));
        assert!(errors[0].message.starts_with("'Foo Bar' in 'p.Foo Bar' is not a valid Java identifier"));
    }

    #[test]
    fn test_process_before_init_fails() {
        let mut processor = Processor::new(PathRenderer);
        let err = processor
            .process(&Round::default(), &mut MemoryFiler::new(), &mut Vec::<Diagnostic>::new())
            .unwrap_err();
        assert!(err.to_string().contains("initialized"));
    }

    #[test]
    fn test_process_after_finish_fails() {
        let mut processor = initialized();
        processor.finish().unwrap();

        assert_eq!(processor.state(), ProcessorState::Done);
        assert!(
            processor
                .process(&Round::default(), &mut MemoryFiler::new(), &mut Vec::<Diagnostic>::new())
                .is_err()
        );
        assert!(processor.finish().is_err());
    }

    #[test]
    fn test_double_init_fails() {
        let mut processor = initialized();
        assert!(processor.init(&Options::new(), &mut Vec::<Diagnostic>::new()).is_err());
    }

    #[test]
    fn test_empty_round_is_claimed() {
        let mut processor = initialized();
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        let claimed = processor
            .process(&Round::default(), &mut filer, &mut diagnostics)
            .unwrap();

        assert!(claimed);
        assert!(filer.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_rounds_are_counted() {
        let mut processor = initialized();
        let mut filer = MemoryFiler::new();

        processor.process(&Round::default(), &mut filer, &mut Vec::<Diagnostic>::new()).unwrap();
        processor.process(&Round::last(), &mut filer, &mut Vec::<Diagnostic>::new()).unwrap();

        assert_eq!(processor.state(), ProcessorState::Processing { round: 2 });
    }

    #[test]
    fn test_failures_skip_only_affected_artifact() {
        let mut processor = initialized();
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let round = Round::new([
            routed("A", "/x/A"),
            routed("Empty", ""),
            routed("Api", "/x/api").with_kind(ElementKind::Interface),
            routed("B", "/x/B"),
        ]);

        assert!(processor.process(&round, &mut filer, &mut diagnostics).unwrap());

        let units: Vec<_> = filer.units().map(|(path, _)| path).collect();
        assert_eq!(units, ["p/A$ARouter.txt", "p/B$ARouter.txt"]);

        let errors: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.location.as_deref())
            .collect();
        assert_eq!(errors, [Some("p.Empty"), Some("p.Api")]);

        let notes = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .count();
        assert_eq!(notes, 4);
    }

    #[test]
    fn test_write_failure_does_not_stop_siblings() {
        let mut processor = initialized();
        let mut filer = DenyingFiler {
            inner: MemoryFiler::new(),
            denied: "A$ARouter.txt",
        };
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let round = Round::new([routed("A", "/x/A"), routed("B", "/x/B")]);

        assert!(processor.process(&round, &mut filer, &mut diagnostics).unwrap());

        let units: Vec<_> = filer.inner.units().collect();
        assert_eq!(units, [("p/B$ARouter.txt", "/x/B")]);

        let errors: Vec<_> = diagnostics.iter().filter(|d| d.severity.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].phase, "emit");
        assert_eq!(errors[0].message, "failed to write 'p/A$ARouter.txt': denied");
        assert_eq!(errors[0].location.as_deref(), Some("p.A"));
    }

    #[test]
    fn test_duplicate_across_rounds_reported() {
        let mut processor = initialized();
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let round = Round::new([routed("A", "/x/A")]);

        processor.process(&round, &mut filer, &mut diagnostics).unwrap();
        processor.process(&round, &mut filer, &mut diagnostics).unwrap();

        let errors: Vec<_> = diagnostics.iter().filter(|d| d.severity.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].phase, "emit");
        assert_eq!(filer.get("p/A$ARouter.txt"), Some("/x/A"));
    }

    #[test]
    fn test_run_all_rounds() {
        let mut processor = Processor::new(PathRenderer);
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let rounds = [
            Round::new([routed("A", "/x/A")]),
            Round::new([routed("B", "/x/B")]),
        ];

        let count = processor
            .run(&Options::new(), &rounds, &mut filer, &mut diagnostics)
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(processor.state(), ProcessorState::Done);
        assert_eq!(filer.len(), 2);
    }

    #[test]
    fn test_custom_annotation() {
        let mut processor = Processor::new(PathRenderer).annotation("com.example.Route");
        processor.init(&Options::new(), &mut Vec::<Diagnostic>::new()).unwrap();
        let mut filer = MemoryFiler::new();
        let round = Round::new([
            routed("A", "/x/A"),
            Element::class("p", "B")
                .annotated(AnnotationMirror::new("com.example.Route").value("path", "/x/B")),
        ]);

        processor.process(&round, &mut filer, &mut Vec::<Diagnostic>::new()).unwrap();

        assert_eq!(processor.supported_annotation_types(), ["com.example.Route"]);
        assert_eq!(filer.len(), 1);
        assert!(filer.get("p/B$ARouter.txt").is_some());
    }

    #[test]
    fn test_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let mut processor = Processor::new(PathRenderer).plugin(CountingPlugin {
            before: before.clone(),
            after: after.clone(),
        });
        processor.init(&Options::new(), &mut Vec::<Diagnostic>::new()).unwrap();

        processor
            .process(&Round::default(), &mut MemoryFiler::new(), &mut Vec::<Diagnostic>::new())
            .unwrap();

        // 4 built-in phases = 4 before + 4 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 4);
        assert_eq!(after.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_plugin_abort_still_reports_diagnostics() {
        let mut processor = Processor::new(PathRenderer).plugin(AbortPlugin);
        processor.init(&Options::new(), &mut Vec::<Diagnostic>::new()).unwrap();
        let mut filer = MemoryFiler::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let round = Round::new([routed("A", "/x/A")]);

        let err = processor.process(&round, &mut filer, &mut diagnostics).unwrap_err();

        assert_eq!(err.to_string(), "stop after validate");
        assert_eq!(diagnostics.len(), 1);
        assert!(filer.is_empty());
    }
}
