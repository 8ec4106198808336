//! # Completion oracle
//!
//! Everything the planner knows about the hosted chat-completion service:
//! - `config`: model, credentials and endpoint, layered from defaults, a TOML
//!   file and the environment
//! - `send`: the HTTP client that posts one prompt and hands back the text
//!
//! ## Architecture
//!
//! ```text
//! prompt → CompletionRequest → ChatCompletionClient (POST api_url) → free text
//! ```
//!
//! The oracle is a trait so the stage sequencer never depends on the network
//! directly. There is no retry and no response validation: whatever the
//! service returns is passed along, and every failure is surfaced to the
//! caller as an [`OracleError`].

pub mod config;
pub mod send;

pub use config::{Config, ConfigError};
pub use send::ChatCompletionClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Request body for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LLMResponse {
    pub choices: Vec<Choice>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Choice {
    pub message: Message,
}

/// One prompt bound for the oracle, with the sampling settings it goes out with.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(config: &Config, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            prompt: prompt.into(),
        }
    }

    /// Prompt length in characters, as logged.
    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }

    /// Wire form: the prompt travels as a single user message.
    pub fn to_llm_request(&self) -> LLMRequest {
        LLMRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: self.prompt.clone(),
            }],
            temperature: self.temperature,
        }
    }
}

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API: {0}")]
    Connect(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed - check your API key")]
    Unauthorized,
    #[error("Access forbidden - insufficient permissions")]
    Forbidden,
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse API response: {0}")]
    MalformedResponse(String),
    #[error("API returned no choices")]
    NoChoices,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Anything that turns a prompt into free text.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError>;
}
