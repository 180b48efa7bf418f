use crate::{ConfigError, ConfigErrorResult, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names when writing to a terminal
    pub colored: bool,
    /// Append to this file instead of stderr
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_ref().map(PathBuf::from)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }
}
