use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::utils::url::UrlUtils;

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Remote spreadsheet source settings
///
/// Both `sheet_id` and `api_key` must be present for the remote source to be
/// queried at all; when either is missing the bundled dataset is served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub sheet_id: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_sheets_range")]
    pub range: String,
    #[serde(default = "default_sheets_api_base_url")]
    pub api_base_url: String,
    /// How long a fetched catalog is reused before the sheet is queried again
    #[serde(default = "default_cache_ttl", with = "duration_serde::duration")]
    pub cache_ttl: Duration,
    #[serde(default = "default_request_timeout", with = "duration_serde::duration")]
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Client whose first video is shown in the hero section
    #[serde(default = "default_featured_client")]
    pub featured_client: String,
    /// Video URLs starting with this prefix are served as local media files
    #[serde(default = "default_local_media_prefix")]
    pub local_media_prefix: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_sheets_range() -> String {
    DEFAULT_SHEETS_RANGE.to_string()
}

fn default_sheets_api_base_url() -> String {
    DEFAULT_SHEETS_API_BASE_URL.to_string()
}

fn default_cache_ttl() -> Duration {
    Duration::from_secs(DEFAULT_CACHE_TTL_SECS)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_featured_client() -> String {
    DEFAULT_FEATURED_CLIENT.to_string()
}

fn default_local_media_prefix() -> String {
    DEFAULT_LOCAL_MEDIA_PREFIX.to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: None,
            api_key: None,
            range: default_sheets_range(),
            api_base_url: default_sheets_api_base_url(),
            cache_ttl: default_cache_ttl(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            featured_client: default_featured_client(),
            local_media_prefix: default_local_media_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            sheets: SheetsConfig::default(),
            portfolio: PortfolioConfig::default(),
        }
    }
}

impl SheetsConfig {
    /// Sheet id and api key, when both are configured and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let sheet_id = self.sheet_id.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let api_key = self.api_key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((sheet_id, api_key))
    }
}

impl Config {
    /// Load defaults, then the TOML file, then `REEL_PORTFOLIO_*` environment overrides.
    ///
    /// A default file is written when `config_file` does not exist yet.
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if !std::path::Path::new(config_file).exists() {
            let contents = toml::to_string_pretty(&Self::default())?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
        }

        let config: Config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.sheets.range.trim().is_empty() {
            return Err(AppError::configuration("sheets.range must not be empty"));
        }
        if !self.portfolio.local_media_prefix.starts_with('/') {
            return Err(AppError::configuration(format!(
                "portfolio.local_media_prefix must be an absolute path, got '{}'",
                self.portfolio.local_media_prefix
            )));
        }
        if !UrlUtils::is_valid(&self.sheets.api_base_url) {
            return Err(AppError::configuration(format!(
                "sheets.api_base_url is not a valid URL: '{}'",
                self.sheets.api_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheets.range, "Sheet1!A2:I1000");
        assert_eq!(config.sheets.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.portfolio.featured_client, "Atlin");
        assert!(config.sheets.credentials().is_none());
    }

    #[test]
    fn test_credentials_require_both_values() {
        let mut sheets = SheetsConfig {
            sheet_id: Some("sheet".to_string()),
            ..SheetsConfig::default()
        };
        assert!(sheets.credentials().is_none());

        sheets.api_key = Some("   ".to_string());
        assert!(sheets.credentials().is_none());

        sheets.api_key = Some("key".to_string());
        assert_eq!(sheets.credentials(), Some(("sheet", "key")));
    }

    #[test]
    fn test_rejects_relative_local_prefix() {
        let mut config = Config::default();
        config.portfolio.local_media_prefix = "videos/".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::Configuration { .. })
        ));
    }

    #[test]
    fn test_load_writes_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config = Config::load_from_file(path_str).unwrap();
        assert!(path.exists());
        assert_eq!(config.web.port, DEFAULT_PORT);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("cache_ttl = \"1m\""));
    }

    #[test]
    fn test_load_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[sheets]\nsheet_id = \"abc\"\napi_key = \"xyz\"\ncache_ttl = \"5m\"\n\n[portfolio]\nfeatured_client = \"Acme\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.sheets.credentials(), Some(("abc", "xyz")));
        assert_eq!(config.sheets.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.portfolio.featured_client, "Acme");
        assert_eq!(config.portfolio.local_media_prefix, "/videos/");
        assert_eq!(config.web.host, "0.0.0.0");
    }
}
