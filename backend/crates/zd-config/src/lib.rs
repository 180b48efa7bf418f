mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_NAME: &str = "zd";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_API_HOST_SUFFIX: &str = "zendesk.com/api/v2";
const DEFAULT_USER_AGENT: &str = concat!("zd/", env!("CARGO_PKG_VERSION"));
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
