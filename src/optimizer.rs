// src/optimizer.rs
use crate::comps::ComparableSource;
use crate::domain::{RawSubmission, SubmissionRequest, ValidationError};
use crate::llm::{GenerationError, TextGenerator};
use crate::prompt::PromptComposer;

/// The three stages behind the form, owned for the server's lifetime and
/// shared across worker threads.
pub struct Pipeline {
    source: Box<dyn ComparableSource>,
    composer: Box<dyn PromptComposer>,
    generator: Box<dyn TextGenerator>,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn ComparableSource>,
        composer: Box<dyn PromptComposer>,
        generator: Box<dyn TextGenerator>,
    ) -> Self {
        Self {
            source,
            composer,
            generator,
        }
    }

    /// A fresh form session, one per request.
    pub fn session(&self) -> FormSession<'_> {
        FormSession {
            pipeline: self,
            state: FormState::AwaitingSubmission,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    AwaitingSubmission,
    Processing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
    pub text: String,
    pub comparables_used: usize,
    /// Comparables could not be loaded; the prompt went out without templates.
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rejected(ValidationError),
    Optimized(Optimized),
    Failed(GenerationError),
}

pub struct FormSession<'a> {
    pipeline: &'a Pipeline,
    state: FormState,
}

impl FormSession<'_> {
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validate, then load → compose → generate. Whatever happens, the
    /// session is back in `AwaitingSubmission` when this returns.
    pub fn submit(&mut self, raw: RawSubmission) -> Outcome {
        let request = match SubmissionRequest::try_from(raw) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(error = %err, "submission rejected");
                return Outcome::Rejected(err);
            }
        };

        self.state = FormState::Processing;
        let outcome = self.process(&request);
        self.state = FormState::AwaitingSubmission;
        outcome
    }

    fn process(&self, request: &SubmissionRequest) -> Outcome {
        let (comparables, degraded) = match self.pipeline.source.comparables() {
            Ok(texts) => (texts, false),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "comparables unavailable, proceeding without templates"
                );
                (Vec::new(), true)
            }
        };

        let prompt = self.pipeline.composer.compose(&comparables, &request.ad_text);
        tracing::debug!(
            prompt_chars = prompt.chars().count(),
            comparables = comparables.len(),
            "prompt composed"
        );

        match self.pipeline.generator.generate(&prompt) {
            Ok(text) => {
                tracing::info!(
                    zip = %request.zip,
                    comparables = comparables.len(),
                    degraded,
                    "ad optimized"
                );
                Outcome::Optimized(Optimized {
                    text,
                    comparables_used: comparables.len(),
                    degraded,
                })
            }
            Err(err) => Outcome::Failed(err),
        }
    }
}
