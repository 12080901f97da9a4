//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Service configuration.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Sign-convention overrides.
    #[serde(default)]
    pub convention: ConventionConfig,
}

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service name used in logs.
    #[serde(default = "default_service_name")]
    pub name: String,
    /// Deployment environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_service_name() -> String {
    "sentra".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            environment: default_environment(),
        }
    }
}

/// Sign-convention configuration.
///
/// The sign convention is the one externally tunable table of the
/// aggregation core. Entries here extend or override the built-in card
/// table; each value must name a polarity (`"credit"` or `"debit"`).
/// Validation of the names happens in the core when the table is built,
/// so a bad override fails loudly instead of defaulting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConventionConfig {
    /// Transaction type code to polarity name.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SENTRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
