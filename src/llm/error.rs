use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Bad or revoked credential (401/403).
    #[error("authentication with the generation service failed: {0}")]
    Authentication(String),

    /// Account is out of credit (429 with `insufficient_quota`).
    #[error("generation service quota exhausted: {0}")]
    Quota(String),

    #[error("generation service rate limit hit: {0}")]
    RateLimited(String),

    #[error("generation service timed out")]
    Timeout,

    #[error("network error talking to generation service: {0}")]
    Network(String),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from generation service: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::RateLimited(_)
            | GenerationError::Timeout
            | GenerationError::Network(_) => true,
            GenerationError::Api { status, .. } => *status >= 500,
            GenerationError::Authentication(_)
            | GenerationError::Quota(_)
            | GenerationError::MalformedResponse(_) => false,
        }
    }

    /// Message shown on the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Authentication(_) => {
                "Generation failed: the service rejected our credentials. Please contact support."
            }
            GenerationError::Quota(_) => {
                "Generation failed: the service quota is exhausted. Please try again later."
            }
            _ => "Generation failed, please try again.",
        }
    }
}
