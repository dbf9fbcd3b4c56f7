// src/config.rs
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;
const DEFAULT_DATASET_PATH: &str = "reator_data.json";
const DEFAULT_CHUNK_SIZE: usize = 5000;
const DEFAULT_CHUNK_OVERLAP: usize = 10;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    InvalidChunking { size: usize, overlap: usize },

    #[error("prompt template must contain {{context}} followed by {{question}}")]
    InvalidTemplate,
}

/// Everything the app needs, resolved once at startup and handed to each
/// component explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub comps: CompsConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Base delay, doubled on every retry.
    pub retry_backoff: Duration,
}

// Keep the credential out of logs.
impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff", &self.retry_backoff)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CompsConfig {
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct PromptConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let prompt = PromptConfig {
            chunk_size: parse_or(&get, "PROMPT_CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
            chunk_overlap: parse_or(&get, "PROMPT_CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP)?,
        };
        if prompt.chunk_overlap >= prompt.chunk_size {
            return Err(ConfigError::InvalidChunking {
                size: prompt.chunk_size,
                overlap: prompt.chunk_overlap,
            });
        }

        let max_workers = parse_or(&get, "MAX_WORKERS", DEFAULT_MAX_WORKERS)?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_WORKERS",
                value: "0".into(),
            });
        }

        Ok(Self {
            server: ServerConfig {
                bind_addr: parse_or(
                    &get,
                    "BIND_ADDR",
                    parse_default("BIND_ADDR", DEFAULT_BIND_ADDR)?,
                )?,
                max_workers,
            },
            generation: GenerationConfig {
                api_key,
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout: Duration::from_secs(parse_or(
                    &get,
                    "OPENAI_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )?),
                max_retries: parse_or(&get, "OPENAI_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
                retry_backoff: Duration::from_millis(parse_or(
                    &get,
                    "OPENAI_RETRY_BACKOFF_MS",
                    DEFAULT_RETRY_BACKOFF_MS,
                )?),
            },
            comps: CompsConfig {
                dataset_path: get("COMPS_DATASET_PATH")
                    .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string())
                    .into(),
            },
            prompt,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
    }
}

fn parse_default<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
