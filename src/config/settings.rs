use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::paths::Paths;
use crate::error::{AktaraError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Search timing
    #[serde(default)]
    pub search: SearchConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Storefront base URL; the search endpoint and page links hang off it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with search requests
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

/// Search timing configuration, all in milliseconds unless noted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is searched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Artificial latency shown with the loading indicator on a cache miss
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    /// Seconds between full clears of the search cache
    #[serde(default = "default_cache_flush_secs")]
    pub cache_flush_secs: u64,
    /// Seconds before a remote search request gives up
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_loading_delay_ms() -> u64 {
    300
}

fn default_cache_flush_secs() -> u64 {
    5 * 60
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            loading_delay_ms: default_loading_delay_ms(),
            cache_flush_secs: default_cache_flush_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn cache_flush_interval(&self) -> Duration {
        Duration::from_secs(self.cache_flush_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let paths = Paths::new()?;
        self.save_to(&paths)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, &contents)?;

        // Contains the API token
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&paths.config_file, perms)?;
        }

        Ok(())
    }

    /// Set the API token
    pub fn set_token(&mut self, token: String) {
        self.api.token = Some(token);
    }

    /// Set a value by its dotted key, validating numeric and enum fields
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| {
                    AktaraError::InvalidArgument(format!("api.base_url is not a URL: {e}"))
                })?;
                self.api.base_url = value.to_string();
            }
            "api.token" => self.set_token(value.to_string()),
            "search.debounce_ms" => self.search.debounce_ms = parse_number(key, value)?,
            "search.loading_delay_ms" => self.search.loading_delay_ms = parse_number(key, value)?,
            "search.cache_flush_secs" => {
                let secs = parse_number(key, value)?;
                if secs == 0 {
                    return Err(AktaraError::InvalidArgument(
                        "search.cache_flush_secs must be greater than 0".to_string(),
                    ));
                }
                self.search.cache_flush_secs = secs;
            }
            "search.timeout_secs" => {
                let secs = parse_number(key, value)?;
                if secs == 0 {
                    return Err(AktaraError::InvalidArgument(
                        "search.timeout_secs must be greater than 0".to_string(),
                    ));
                }
                self.search.timeout_secs = secs;
            }
            "output.format" => {
                if value != "pretty" && value != "json" {
                    return Err(AktaraError::InvalidArgument(
                        "output.format must be 'pretty' or 'json'".to_string(),
                    ));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(AktaraError::InvalidArgument(format!(
                    "Unknown config key: {key}. Valid keys: api.base_url, api.token, \
                     search.debounce_ms, search.loading_delay_ms, search.cache_flush_secs, \
                     search.timeout_secs, output.format"
                )));
            }
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| AktaraError::InvalidArgument(format!("{key} must be a whole number")))
}
