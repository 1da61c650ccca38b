//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use satchel_core::{SatchelError, SatchelResult};
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader.
///
/// Configuration is loaded from multiple sources in order:
/// 1. `config/default.toml` - Default values
/// 2. `config/{environment}.toml` - Environment-specific overrides
/// 3. `config/local.toml` - Local overrides (not committed)
/// 4. Environment variables with `SATCHEL_` prefix
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader for the given directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> SatchelResult<AppConfig> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("SATCHEL_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Default configuration
        let default_path = format!("{}/default.toml", self.config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Environment-specific configuration
        let env_path = format!("{}/{}.toml", self.config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", self.config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Environment variables (SATCHEL_ prefix, __ as separator)
        builder = builder.add_source(
            Environment::with_prefix("SATCHEL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| SatchelError::Configuration(e.to_string()))?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| SatchelError::Configuration(e.to_string()))?;
        app_config.app.environment = environment;

        Self::validate(&app_config)?;

        Ok(app_config)
    }

    /// Validates critical configuration values.
    fn validate(config: &AppConfig) -> SatchelResult<()> {
        if config.security.jwt_secret.trim().is_empty() && config.app.environment != "development" {
            return Err(SatchelError::Configuration(
                "security.jwt_secret must be set outside development".to_string(),
            ));
        }

        if config.database.max_connections == 0 {
            return Err(SatchelError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if config.security.jwt_expiration_secs == 0 {
            return Err(SatchelError::Configuration(
                "security.jwt_expiration_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
