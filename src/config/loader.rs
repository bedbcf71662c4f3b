use std::env;
use std::time::Duration;

use super::env::{AppConfig, ChatConfig, ConfigError, DetectConfig, DirectoryConfig, LoggingConfig};

const DEFAULT_MODEL: &str = "waste-segregation-jbite/1";
const DEFAULT_BASE_URL: &str = "https://detect.roboflow.com";
const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_TYPING_DELAY_MS: u64 = 1_500;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let detect = DetectConfig {
            api_key: env::var("ROBOFLOW_API_KEY").ok().filter(|v| !v.is_empty()),
            model: env::var("ROBOFLOW_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("ROBOFLOW_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            max_image_bytes: parse_u64("MAX_IMAGE_BYTES")?.unwrap_or(DEFAULT_MAX_IMAGE_BYTES),
        };

        let chat = ChatConfig {
            typing_delay: Duration::from_millis(
                parse_u64("TYPING_DELAY_MS")?.unwrap_or(DEFAULT_TYPING_DELAY_MS),
            ),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        Ok(Self {
            detect,
            chat,
            directories,
            logging,
        })
    }
}

fn parse_u64(key: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key)),
        Err(_) => Ok(None),
    }
}
