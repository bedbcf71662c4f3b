use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub detect: DetectConfig,
    pub chat: ChatConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

/// Settings for the hosted detection endpoint. The API key is runtime
/// configuration, never a compiled-in constant; a missing key leaves the
/// image flow unconfigured rather than failing startup.
#[derive(Debug, Clone)]
pub struct DetectConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_image_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub typing_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}
