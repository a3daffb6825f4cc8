//! Model gateway adapters
//!
//! Implementations of [`ModelGateway`]:
//! - [`GeminiGateway`]: Google Generative Language REST API (`generateContent`)
//! - [`ScriptedGateway`]: queued replies for tests and offline demos

pub mod gemini;
pub mod scripted;

use std::sync::Arc;

use franchise_assistant_config::{ModelProvider, ModelSettings};
use franchise_assistant_core::{GatewayError, ModelGateway};

pub use gemini::GeminiGateway;
pub use scripted::ScriptedGateway;

/// Reply used by the scripted provider when no reply was queued
pub const DEMO_REPLY: &str = "Thanks! Noted. (Demo mode: connect a model API key for real advice.)";

/// Build the gateway selected in settings
pub fn create_gateway(settings: &ModelSettings) -> Result<Arc<dyn ModelGateway>, GatewayError> {
    match settings.provider {
        ModelProvider::Gemini => Ok(Arc::new(GeminiGateway::from_settings(settings)?)),
        ModelProvider::Scripted => {
            tracing::warn!("Using scripted model gateway; replies are canned");
            Ok(Arc::new(ScriptedGateway::with_default_reply(DEMO_REPLY)))
        }
    }
}
