pub mod error;
pub mod openai;

pub use error::GenerationError;
pub use openai::OpenAiClient;

/// The one capability the pipeline needs from a language model.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
