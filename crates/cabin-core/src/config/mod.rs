use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_GUEST_FALLBACK, DEFAULT_GUEST_MARKER, DEFAULT_RESERVED_PHRASES};
use crate::error::{CoreError, CoreResult};
use crate::types::ReservationSource;

/// Prefix for environment overrides, e.g. `CABIN__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CABIN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub guest: GuestConfig,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Guest-name heuristic settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuestConfig {
    pub marker: String,
    pub reserved_phrases: Vec<String>,
    pub fallback_name: String,
}

impl Default for GuestConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_GUEST_MARKER.to_string(),
            reserved_phrases: DEFAULT_RESERVED_PHRASES
                .iter()
                .map(ToString::to_string)
                .collect(),
            fallback_name: DEFAULT_GUEST_FALLBACK.to_string(),
        }
    }
}

/// An already-fetched calendar feed on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    pub path: PathBuf,
    pub source: ReservationSource,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and `CABIN__*`
    /// environment variables, in increasing order of precedence.
    ///
    /// When `path` is given the file must exist; otherwise `config.toml` in the
    /// working directory is read if present.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config.toml").required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file)
            // Env overrides
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the invariants deserialization cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for an empty guest marker or fallback name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.guest.marker.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "guest.marker must not be empty".to_string(),
            ));
        }
        if self.guest.fallback_name.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "guest.fallback_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `CABIN__SECTION__KEY` overrides. `CABIN__GUEST__RESERVED_PHRASES` takes a
/// comma-separated list.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("guest.reserved_phrases")
}

/// ## Summary
/// Loads configuration from a `.env` file, the config file and environment variables.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    tracing::debug!(path = ?path, "Loading configuration");

    Settings::load(path)
}
