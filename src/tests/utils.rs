use crate::comps::{ComparableSource, CompsError};
use crate::domain::RawSubmission;
use crate::llm::{GenerationError, TextGenerator};
use crate::optimizer::Pipeline;
use crate::prompt::PromptComposer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared call count; clone it out before boxing the stub.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct StubSource {
    result: Result<Vec<String>, ()>,
    calls: CallCounter,
}

impl StubSource {
    pub fn ok(texts: Vec<&str>) -> Self {
        Self {
            result: Ok(texts.into_iter().map(String::from).collect()),
            calls: CallCounter::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(()),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl ComparableSource for StubSource {
    fn comparables(&self) -> Result<Vec<String>, CompsError> {
        self.calls.bump();
        self.result
            .clone()
            .map_err(|_| CompsError::MissingField("soldOn"))
    }
}

/// Deterministic stand-in for the template composer.
#[derive(Default)]
pub struct StubComposer {
    calls: CallCounter,
}

impl StubComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl PromptComposer for StubComposer {
    fn compose(&self, comparables: &[String], ad_text: &str) -> String {
        self.calls.bump();
        format!(
            "comparables={}\n{}\n{}",
            comparables.len(),
            comparables.join("\n"),
            ad_text
        )
    }
}

pub struct StubGenerator {
    result: Result<String, GenerationError>,
    calls: CallCounter,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn ok(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    pub fn failing(err: GenerationError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<String, GenerationError>) -> Self {
        Self {
            result,
            calls: CallCounter::default(),
            prompts: Arc::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl TextGenerator for StubGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.bump();
        if let Ok(mut seen) = self.prompts.lock() {
            seen.push(prompt.to_string());
        }
        self.result.clone()
    }
}

/// A submission that passes every check.
pub fn valid_submission() -> RawSubmission {
    RawSubmission {
        ad_text: "Spacious three bedroom ranch on a quiet cul-de-sac with an updated kitchen, \
                  hardwood floors and a large fenced backyard."
            .to_string(),
        zip: "78704".to_string(),
        beds: "3".to_string(),
        baths: "2".to_string(),
        pool: true,
    }
}

/// Pipeline wired with stubs plus handles to their call counts.
pub struct StubbedPipeline {
    pub pipeline: Pipeline,
    pub source_calls: CallCounter,
    pub composer_calls: CallCounter,
    pub generator_calls: CallCounter,
}

pub fn stubbed_pipeline(source: StubSource, generator: StubGenerator) -> StubbedPipeline {
    let composer = StubComposer::new();
    let source_calls = source.calls();
    let composer_calls = composer.calls();
    let generator_calls = generator.calls();

    StubbedPipeline {
        pipeline: Pipeline::new(Box::new(source), Box::new(composer), Box::new(generator)),
        source_calls,
        composer_calls,
        generator_calls,
    }
}
