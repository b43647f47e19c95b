use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::ports::{GenerationOptions, MIN_QUIZ_QUESTIONS};
use crate::domain::DeckStyle;
use crate::infrastructure::llm::DEFAULT_OPENAI_BASE_URL;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub use_mock: bool,
    pub default_style: DeckStyle,
    pub completion_model: String,
    pub base_url: String,
    pub mock_response_delay_ms: u64,
    pub quiz_questions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{env}.*` if present, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_upload_mb", 10_i64)?
            .set_default("generation.use_mock", true)?
            .set_default("generation.default_style", "classic")?
            .set_default("generation.completion_model", "gpt-4o-mini")?
            .set_default("generation.base_url", DEFAULT_OPENAI_BASE_URL)?
            .set_default("generation.mock_response_delay_ms", 0_i64)?
            .set_default("generation.quiz_questions", MIN_QUIZ_QUESTIONS as i64)?
            .set_default("logging.level", "info,lectern=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl GenerationSettings {
    /// Request-independent defaults; handlers override per call.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            api_key: self.api_key.clone(),
            use_mock: self.use_mock,
            style: self.default_style,
            quiz_questions: self.quiz_questions,
        }
    }
}
