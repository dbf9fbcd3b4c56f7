use crate::config::GenerationConfig;
use crate::llm::{GenerationError, TextGenerator};
use rand::Rng;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Blocking client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_retries: u32,
    retry_backoff: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    code: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl OpenAiClient {
    pub fn from_config(cfg: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| GenerationError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            max_retries: cfg.max_retries,
            retry_backoff: cfg.retry_backoff,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One request, no retries.
    fn complete_once(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(classify_transport)?;

        let status = response.status().as_u16();
        let text = response.text().map_err(classify_transport)?;

        if !(200..300).contains(&status) {
            return Err(classify_status(status, &text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::MalformedResponse("response had no choices".into()))
    }

    /// Exponential backoff with up to 25% jitter.
    fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        let base = self.retry_backoff.saturating_mul(factor);
        let jitter_ms = (base.as_millis() / 4) as u64;
        let jitter = if jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_ms)
        };
        base + Duration::from_millis(jitter)
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let started = Instant::now();
        let mut attempt = 0u32;

        loop {
            match self.complete_once(prompt) {
                Ok(text) => {
                    tracing::info!(
                        model = %self.model,
                        attempts = attempt + 1,
                        duration_ms = started.elapsed().as_millis() as u64,
                        "generation completed"
                    );
                    return Ok(text);
                }
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff_for(attempt);
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "generation attempt failed; retrying"
                    );
                    std::thread::sleep(delay);
                }
                Err(err) => {
                    tracing::error!(
                        model = %self.model,
                        attempts = attempt + 1,
                        error = %err,
                        "generation failed"
                    );
                    return Err(err);
                }
            }
        }
    }
}

fn classify_transport(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else if err.is_decode() {
        GenerationError::MalformedResponse(err.to_string())
    } else {
        GenerationError::Network(err.to_string())
    }
}

fn classify_status(status: u16, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| body.trim().to_string());
    let out_of_quota = detail.as_ref().is_some_and(|d| {
        d.code.as_deref() == Some("insufficient_quota")
            || d.kind.as_deref() == Some("insufficient_quota")
    });

    match status {
        401 | 403 => GenerationError::Authentication(message),
        429 if out_of_quota => GenerationError::Quota(message),
        429 => GenerationError::RateLimited(message),
        _ => GenerationError::Api { status, message },
    }
}
