//! Runtime settings
//!
//! Layered with the `config` crate:
//! 1. Built-in defaults (serde defaults on every section)
//! 2. `config/default.{toml,yaml}` and `config/{RUN_MODE}.{toml,yaml}` when present
//! 3. An explicit file passed by the caller
//! 4. Environment variables, e.g. `FRANCHISE__MODEL__API_KEY`

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::{conversation, endpoints, leads, server, timeouts};
use crate::ConfigError;

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub leads: LeadSettings,
    /// YAML file replacing the built-in localization tables
    pub localization_path: Option<String>,
    pub observability: ObservabilitySettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty allows any
    pub cors_origins: Vec<String>,
    /// Seconds without a request before a widget is evicted
    pub widget_idle_secs: u64,
    pub max_widgets: usize,
    pub widget_sweep_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: server::HOST.to_string(),
            port: server::PORT,
            cors_origins: Vec::new(),
            widget_idle_secs: server::WIDGET_IDLE_SECS,
            max_widgets: server::MAX_WIDGETS,
            widget_sweep_secs: server::WIDGET_SWEEP_SECS,
        }
    }
}

impl ServerSettings {
    pub fn widget_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.widget_idle_secs)
    }

    pub fn widget_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.widget_sweep_secs)
    }
}

/// Which gateway implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    #[default]
    Gemini,
    /// Canned replies, for demos and local development
    Scripted,
}

/// External model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub provider: ModelProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Response length ceiling (tokens)
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout_ms: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            provider: ModelProvider::default(),
            api_key: None,
            model: endpoints::GEMINI_MODEL.to_string(),
            base_url: endpoints::GEMINI_DEFAULT.to_string(),
            max_output_tokens: conversation::MAX_OUTPUT_TOKENS,
            temperature: conversation::TEMPERATURE,
            timeout_ms: timeouts::MODEL_REQUEST_MS,
        }
    }
}

impl ModelSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Where leads are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadBackend {
    #[default]
    Memory,
    Firestore,
}

/// Lead persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSettings {
    pub backend: LeadBackend,
    pub project_id: Option<String>,
    pub collection: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for LeadSettings {
    fn default() -> Self {
        Self {
            backend: LeadBackend::default(),
            project_id: None,
            collection: leads::DEFAULT_COLLECTION.to_string(),
            api_key: None,
            base_url: endpoints::FIRESTORE_DEFAULT.to_string(),
            timeout_ms: timeouts::LEAD_WRITE_MS,
        }
    }
}

impl LeadSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Default filter when `RUST_LOG` is unset
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Settings {
    /// Load from the standard locations and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None::<&Path>)
    }

    /// Load with an optional explicit file layered over the standard locations
    pub fn load_from<P: AsRef<Path>>(file: Option<P>) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Some(path) = file {
            let path = path.as_ref();
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                    message: "no such file".to_string(),
                });
            }
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("FRANCHISE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        tracing::debug!(
            run_mode = %run_mode,
            provider = ?settings.model.provider,
            lead_backend = ?settings.leads.backend,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Reject combinations the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.server.widget_idle_secs == 0
            || self.server.max_widgets == 0
            || self.server.widget_sweep_secs == 0
        {
            return Err(ConfigError::Invalid(
                "server widget limits must be non-zero".into(),
            ));
        }
        if self.model.max_output_tokens == 0 {
            return Err(ConfigError::Invalid(
                "model.max_output_tokens must be non-zero".into(),
            ));
        }
        if self.model.timeout_ms == 0 {
            return Err(ConfigError::Invalid("model.timeout_ms must be non-zero".into()));
        }
        if self.model.provider == ModelProvider::Gemini
            && self.model.api_key.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::Invalid(
                "model.api_key is required for the gemini provider".into(),
            ));
        }
        if self.leads.backend == LeadBackend::Firestore
            && self.leads.project_id.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::Invalid(
                "leads.project_id is required for the firestore backend".into(),
            ));
        }
        Ok(())
    }
}
