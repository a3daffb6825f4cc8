//! Port to the external text-generation service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Role of a turn as the model expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// A single role-tagged utterance sent as history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Everything the gateway needs for one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub system_instruction: String,
    /// Prior turns, oldest first, never including `user_text`
    pub history: Vec<Turn>,
    pub user_text: String,
    /// Response length ceiling in tokens
    pub max_output_tokens: u32,
}

/// Failures of a generation call. None of them carry partial text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("model service returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
        retryable: bool,
    },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("gateway misconfigured: {0}")]
    Configuration(String),

    #[error("model call abandoned before it completed")]
    Abandoned,
}

impl GatewayError {
    /// Whether resubmitting the same turn may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network(_)
            | GatewayError::Timeout(_)
            | GatewayError::EmptyResponse
            | GatewayError::Abandoned => true,
            GatewayError::Http { retryable, .. } => *retryable,
            GatewayError::InvalidResponse(_) | GatewayError::Configuration(_) => false,
        }
    }

    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Network(_) => "network",
            GatewayError::Timeout(_) => "timeout",
            GatewayError::Http { .. } => "http",
            GatewayError::EmptyResponse => "empty",
            GatewayError::InvalidResponse(_) => "invalid",
            GatewayError::Configuration(_) => "configuration",
            GatewayError::Abandoned => "abandoned",
        }
    }
}

/// External generative model behind a single request/response call.
///
/// Implementations must not panic; every failure is a [`GatewayError`].
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Generate the assistant reply for `request.user_text`
    async fn generate(&self, request: GenerateRequest) -> Result<String, GatewayError>;
}
