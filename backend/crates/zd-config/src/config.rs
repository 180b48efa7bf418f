use crate::{
    ApiConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ZD_CONFIG_DIR env var, else use the platform config dir
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ZD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ZD_CONFIG_DIR env var > <platform config dir>/zd
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("ZD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api
                .resolved_base_url()
                .unwrap_or_else(|_| String::from("<unset>")),
            self.api.timeout_secs
        );
        info!(
            "  auth: {}",
            match &self.api.email {
                Some(email) if self.api.api_token.is_some() => format!("token ({})", email),
                _ => String::from("none"),
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_option_string("ZD_SUBDOMAIN", &mut self.api.subdomain);
        Self::apply_env_option_string("ZD_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("ZD_EMAIL", &mut self.api.email);
        Self::apply_env_option_string("ZD_API_TOKEN", &mut self.api.api_token);
        Self::apply_env_parse("ZD_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Logging
        Self::apply_env_parse("ZD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ZD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ZD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
