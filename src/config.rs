use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SPORTS_API_BASE, DEFAULT_WEATHER_API_BASE,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the sports data service. Should include the https:// prefix.
    #[serde(default = "default_sports_api_base")]
    pub sports_api_base: String,
    /// Base URL of the weather data service. Should include the https:// prefix.
    #[serde(default = "default_weather_api_base")]
    pub weather_api_base: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_sports_api_base() -> String {
    DEFAULT_SPORTS_API_BASE.to_string()
}

fn default_weather_api_base() -> String {
    DEFAULT_WEATHER_API_BASE.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sports_api_base: default_sports_api_base(),
            weather_api_base: default_weather_api_base(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields built-in defaults; neither upstream service
    /// requires credentials, so there is nothing to prompt for.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `COURTCAST_SPORTS_API` - Override sports service base URL
    /// - `COURTCAST_WEATHER_API` - Override weather service base URL
    /// - `COURTCAST_LOG_FILE` - Override log file path
    /// - `COURTCAST_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&Self::get_config_path()).await
    }

    /// Loads configuration from a specific file path, applying the same
    /// defaulting and environment overrides as [`Config::load`].
    pub async fn load_from_path(path: &Path) -> Result<Self, AppError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        if let Ok(sports_api) = std::env::var("COURTCAST_SPORTS_API") {
            config.sports_api_base = sports_api;
        }
        if let Ok(weather_api) = std::env::var("COURTCAST_WEATHER_API") {
            config.weather_api_base = weather_api;
        }
        if let Ok(log_file) = std::env::var("COURTCAST_LOG_FILE") {
            config.log_file_path = Some(log_file);
        }
        if let Ok(timeout) = std::env::var("COURTCAST_HTTP_TIMEOUT") {
            config.http_timeout_seconds = timeout.parse().map_err(|_| {
                AppError::config_error(format!(
                    "COURTCAST_HTTP_TIMEOUT must be a positive integer, got '{timeout}'"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the default config file location,
    /// creating the config directory if needed.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&Self::get_config_path()).await
    }

    /// Saves the configuration to a specific file path.
    pub async fn save_to_path(&self, path: &Path) -> Result<(), AppError> {
        self.validate()?;
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.sports_api_base.trim().is_empty() {
            return Err(AppError::config_error("sports_api_base must not be empty"));
        }
        if self.weather_api_base.trim().is_empty() {
            return Err(AppError::config_error("weather_api_base must not be empty"));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "http_timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Platform-specific path of the config file.
    pub fn get_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courtcast")
            .join("config.toml")
    }

    /// Platform-specific directory for log files.
    pub fn get_log_dir_path() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courtcast")
            .join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.sports_api_base, DEFAULT_SPORTS_API_BASE);
        assert_eq!(config.weather_api_base, DEFAULT_WEATHER_API_BASE);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert!(config.log_file_path.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            sports_api_base: "http://localhost:8080".to_string(),
            weather_api_base: "http://localhost:8081".to_string(),
            log_file_path: Some("/tmp/courtcast.log".to_string()),
            http_timeout_seconds: 10,
        };
        config.save_to_path(&path).await.unwrap();

        let loaded = Config::load_from_path(&path).await.unwrap();
        assert_eq!(loaded.sports_api_base, "http://localhost:8080");
        assert_eq!(loaded.weather_api_base, "http://localhost:8081");
        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/courtcast.log"));
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "sports_api_base = \"http://localhost:9000\"\n")
            .await
            .unwrap();
        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.sports_api_base, "http://localhost:9000");
        assert_eq!(config.weather_api_base, DEFAULT_WEATHER_API_BASE);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_zero_timeout_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "http_timeout_seconds = 0\n")
            .await
            .unwrap();
        let result = Config::load_from_path(&path).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
