//! Configuration module
//!
//! This module provides the process configuration. Every value has a default that
//! matches the public HTTP contract, so the service runs without any environment
//! variables; `.env` files and variables only override those defaults.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_COLOR_COUNT, DEFAULT_DELETION_DELAY_SECS, DEFAULT_UPLOAD_DIR, MAX_COLOR_COUNT,
};

const SERVER_PORT: u16 = 5000;
const MAX_FILE_SIZE_MB: usize = 10;

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
}

/// Analyzer service configuration
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub base: BaseConfig,
    /// Directory holding uploads until their scheduled deletion
    pub upload_dir: PathBuf,
    /// How long an upload stays on disk before it is deleted
    pub deletion_delay: Duration,
    pub dominant_color_count: usize,
    pub max_file_size_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<AnalyzerConfig>);

impl Default for Config {
    fn default() -> Self {
        Config(Box::new(AnalyzerConfig::default()))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig {
                server_port: SERVER_PORT,
                environment: "development".to_string(),
            },
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            deletion_delay: Duration::from_secs(DEFAULT_DELETION_DELAY_SECS),
            dominant_color_count: DEFAULT_COLOR_COUNT,
            max_file_size_bytes: MAX_FILE_SIZE_MB * 1024 * 1024,
        }
    }
}

impl Config {
    fn as_analyzer(&self) -> &AnalyzerConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_analyzer().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = AnalyzerConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_analyzer().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_analyzer().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_analyzer().base.environment
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_analyzer().upload_dir
    }

    pub fn deletion_delay(&self) -> Duration {
        self.as_analyzer().deletion_delay
    }

    pub fn dominant_color_count(&self) -> usize {
        self.as_analyzer().dominant_color_count
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_analyzer().max_file_size_bytes
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
        };

        let config = AnalyzerConfig {
            base,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            deletion_delay: Duration::from_secs(
                env::var("DELETION_DELAY_SECS")
                    .unwrap_or_else(|_| DEFAULT_DELETION_DELAY_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_DELETION_DELAY_SECS),
            ),
            dominant_color_count: env::var("DOMINANT_COLOR_COUNT")
                .unwrap_or_else(|_| DEFAULT_COLOR_COUNT.to_string())
                .parse()
                .unwrap_or(DEFAULT_COLOR_COUNT),
            max_file_size_bytes: megabytes_to_bytes(max_file_size_mb)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.dominant_color_count == 0 || self.dominant_color_count > MAX_COLOR_COUNT {
            return Err(anyhow::anyhow!(
                "DOMINANT_COLOR_COUNT must be between 1 and {}",
                MAX_COLOR_COUNT
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        Ok(())
    }
}

fn megabytes_to_bytes(megabytes: usize) -> Result<usize, anyhow::Error> {
    megabytes
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_FILE_SIZE_MB is too large: {}", megabytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_contract() {
        let config = Config::default();
        assert_eq!(config.upload_dir(), Path::new("uploads"));
        assert_eq!(config.deletion_delay(), Duration::from_secs(60));
        assert_eq!(config.dominant_color_count(), 5);
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_color_count_out_of_range() {
        let mut config = AnalyzerConfig::default();
        config.dominant_color_count = 0;
        assert!(config.validate().is_err());

        config.dominant_color_count = MAX_COLOR_COUNT + 1;
        assert!(config.validate().is_err());

        config.dominant_color_count = MAX_COLOR_COUNT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let mut config = AnalyzerConfig::default();
        config.max_file_size_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_megabytes_to_bytes_rejects_overflow() {
        assert_eq!(megabytes_to_bytes(10).unwrap(), 10 * 1024 * 1024);
        assert!(megabytes_to_bytes(usize::MAX).is_err());
        assert!(megabytes_to_bytes(usize::MAX / 1024).is_err());
    }

    #[test]
    fn test_is_production() {
        let mut inner = AnalyzerConfig::default();
        inner.base.environment = "Prod".to_string();
        assert!(Config(Box::new(inner)).is_production());
    }
}
