//! Configuration for the BACAI gateway.
//!
//! Configuration is read from `bacai.json` (every field optional), then
//! overridden by the `MODEL_SERVICE_URL`, `MODEL_SERVICE_TOKEN` and
//! `ENVIRONMENT` environment variables, then validated.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// The default config file name.
const CONFIG_FILE_NAME: &str = "bacai.json";

/// Environment variable overriding [`Config::model_service_url`].
pub const ENV_MODEL_SERVICE_URL: &str = "MODEL_SERVICE_URL";

/// Environment variable overriding [`Config::model_service_token`].
pub const ENV_MODEL_SERVICE_TOKEN: &str = "MODEL_SERVICE_TOKEN";

/// Environment variable overriding [`Config::environment`].
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

fn default_model_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_model_service_token() -> String {
    "default-token".to_string()
}

/// Default timeout for model service calls, in seconds.
const fn default_request_timeout() -> u64 {
    30
}

/// Default timeout for the model service health probe, in seconds.
const fn default_health_timeout() -> u64 {
    5
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://bacai.vercel.app".to_string(),
        "https://bacai-*.vercel.app".to_string(),
    ]
}

/// Gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the model service, without trailing `/api/process`.
    #[serde(default = "default_model_service_url")]
    pub model_service_url: String,

    /// Bearer token sent to the model service.
    #[serde(default = "default_model_service_token")]
    pub model_service_token: String,

    /// Timeout for `solve`/`explain`/`converse` calls, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Timeout for the model service health probe, in seconds.
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,

    /// Deployment environment reported by the health endpoints.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS origins. A `*` inside a pattern matches any run of characters.
    /// An empty list allows every origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_service_url: default_model_service_url(),
            model_service_token: default_model_service_token(),
            request_timeout_secs: default_request_timeout(),
            health_timeout_secs: default_health_timeout(),
            environment: default_environment(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Config {
    /// Loads configuration from the current working directory.
    ///
    /// Looks for `bacai.json`; falls back to defaults when it is absent.
    /// Environment overrides are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but contains invalid JSON, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            GatewayError::config_parse(
                "<current directory>",
                format!("cannot determine current directory: {e}"),
            )
        })?;
        Self::load_from_dir(&current_dir)
    }

    /// Loads configuration from `bacai.json` in a specific directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but contains invalid JSON.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_from_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the default configuration. Environment overrides
    /// are applied after parsing, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigParseError` if the file exists but cannot
    /// be read or parsed, and `GatewayError::ConfigValidationError` if the
    /// values are invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<Self>(&contents)
                .map_err(|e| GatewayError::config_parse(path, e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                return Err(GatewayError::config_parse(
                    path,
                    format!("failed to read file: {e}"),
                ));
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(ENV_MODEL_SERVICE_URL) {
            self.model_service_url = url;
        }
        if let Some(token) = lookup(ENV_MODEL_SERVICE_TOKEN) {
            self.model_service_token = token;
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            self.environment = environment;
        }
    }

    /// Validates the configuration values.
    ///
    /// - `model_service_url` must be a non-empty `http://` or `https://` URL
    /// - `request_timeout_secs` and `health_timeout_secs` must be greater than 0
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigValidationError` if any check fails.
    pub fn validate(&self) -> Result<()> {
        let url = self.model_service_url.trim();
        if url.is_empty() {
            return Err(GatewayError::config_validation(
                "modelServiceUrl must not be empty",
                "Set modelServiceUrl in bacai.json or the MODEL_SERVICE_URL environment variable",
            ));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GatewayError::config_validation(
                format!("modelServiceUrl '{url}' must start with http:// or https://"),
                "Use a full URL such as http://localhost:8000 for modelServiceUrl",
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(GatewayError::config_validation(
                "requestTimeoutSecs must be greater than 0",
                "Set requestTimeoutSecs to at least 1 second in your bacai.json",
            ));
        }

        if self.health_timeout_secs == 0 {
            return Err(GatewayError::config_validation(
                "healthTimeoutSecs must be greater than 0",
                "Set healthTimeoutSecs to at least 1 second in your bacai.json",
            ));
        }

        Ok(())
    }

    /// Model service base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.model_service_url.trim().trim_end_matches('/')
    }

    /// Timeout for model service calls.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout for the model service health probe.
    #[must_use]
    pub const fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}
