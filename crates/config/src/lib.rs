//! Configuration for the franchise assistant
//!
//! - [`Settings`]: layered runtime settings (defaults, files, environment)
//! - [`LocalizationConfig`]: questionnaire text, options, greetings and fallbacks per language
//! - [`AdvisorPrompt`]: the system instruction template
//! - [`constants`]: business constants shared across crates

pub mod constants;
pub mod localization;
pub mod prompts;
pub mod settings;

pub use localization::{LanguagePack, LocalizationConfig, QuestionOption, StepText};
pub use prompts::AdvisorPrompt;
pub use settings::{
    LeadBackend, LeadSettings, ModelProvider, ModelSettings, ObservabilitySettings,
    ServerSettings, Settings,
};

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found at {path}: {message}")]
    FileNotFound { path: String, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Load(#[from] config::ConfigError),
}
