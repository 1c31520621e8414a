use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

use crate::models::ParsedStep;

/// Tellere for kompilatoren. Registreres i et eget Registry som kalleren
/// kan eksponere eller lese direkte.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    steps_classified: IntCounterVec,
    parse_failures: IntCounter,
    documents_compiled: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let steps_classified = IntCounterVec::new(
            Opts::new("zwo_steps_classified_total", "Steps classified, by step kind"),
            &["kind"],
        )?;
        let parse_failures = IntCounter::new(
            "zwo_parse_failures_total",
            "Workout groups dropped because a step matched no grammar",
        )?;
        let documents_compiled =
            IntCounter::new("zwo_documents_compiled_total", "Workout documents compiled")?;

        registry.register(Box::new(steps_classified.clone()))?;
        registry.register(Box::new(parse_failures.clone()))?;
        registry.register(Box::new(documents_compiled.clone()))?;

        Ok(Self { registry, steps_classified, parse_failures, documents_compiled })
    }

    pub(crate) fn record_document(&self, steps: &[ParsedStep]) {
        for step in steps {
            self.steps_classified.with_label_values(&[step.kind()]).inc();
        }
        self.documents_compiled.inc();
    }

    pub(crate) fn record_failure(&self) {
        self.parse_failures.inc();
    }

    pub fn steps_classified(&self, kind: &str) -> u64 {
        self.steps_classified.with_label_values(&[kind]).get()
    }

    pub fn parse_failures(&self) -> u64 {
        self.parse_failures.get()
    }

    pub fn documents_compiled(&self) -> u64 {
        self.documents_compiled.get()
    }
}
