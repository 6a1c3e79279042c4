use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: TagProviderSettings,
    pub flights: OfferProviderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Chat-completion provider used for tag extraction
#[derive(Debug, Clone, Deserialize)]
pub struct TagProviderSettings {
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Absent key does not fail startup; tag extraction degrades to an
    /// empty tag list at request time.
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Flight-offer provider
#[derive(Debug, Clone, Deserialize)]
pub struct OfferProviderSettings {
    pub endpoint: String,
    pub api_host: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_currency() -> String { "USD".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROAMLY_)
    /// 4. The bare provider secrets (OPENAI_API_KEY, RAPIDAPI_KEY)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROAMLY_)
            // e.g., ROAMLY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROAMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_secrets(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROAMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_secrets(settings)?.try_deserialize()
    }
}

/// Override the provider API keys from the conventional environment variable
/// names the deployment already uses (OPENAI_API_KEY, RAPIDAPI_KEY).
fn substitute_env_secrets(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let openai_key = env::var("OPENAI_API_KEY")
        .or_else(|_| env::var("ROAMLY_OPENAI__API_KEY"))
        .ok();
    let rapidapi_key = env::var("RAPIDAPI_KEY")
        .or_else(|_| env::var("ROAMLY_FLIGHTS__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = openai_key {
        builder = builder.set_override("openai.api_key", key)?;
    }
    if let Some(key) = rapidapi_key {
        builder = builder.set_override("flights.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_and_currency() {
        assert_eq!(default_model(), "gpt-3.5-turbo");
        assert_eq!(default_currency(), "USD");
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
