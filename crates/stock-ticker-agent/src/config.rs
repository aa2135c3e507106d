//! Configuration for the stock ticker tools

use crate::error::{Result, StockError};
use agent_utils::config::{env_parse, env_var};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const ALPHA_VANTAGE_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";
const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Configuration shared by every provider client and tool
///
/// Built once at startup and passed around behind an `Arc`.
#[derive(Clone, Serialize, Deserialize)]
pub struct StockConfig {
    /// Alpha Vantage API key (quotes, daily series, symbol search)
    pub alpha_vantage_api_key: Option<String>,

    /// NewsAPI key
    pub news_api_key: Option<String>,

    /// Alpha Vantage query endpoint
    pub alpha_vantage_base_url: String,

    /// NewsAPI `everything` endpoint
    pub news_api_base_url: String,

    /// Upper bound on any single provider call
    pub request_timeout: Duration,

    /// Number of articles requested from the news provider
    pub news_page_size: u32,

    /// Optional Alpha Vantage pacing, requests per minute
    pub alpha_vantage_rate_limit: Option<u32>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: None,
            news_api_key: None,
            alpha_vantage_base_url: DEFAULT_ALPHA_VANTAGE_URL.to_string(),
            news_api_base_url: DEFAULT_NEWS_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            news_page_size: 5,
            alpha_vantage_rate_limit: None,
        }
    }
}

impl fmt::Debug for StockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(key: Option<&String>) -> &'static str {
            if key.is_some() { "<set>" } else { "<unset>" }
        }

        f.debug_struct("StockConfig")
            .field("alpha_vantage_api_key", &redact(self.alpha_vantage_api_key.as_ref()))
            .field("news_api_key", &redact(self.news_api_key.as_ref()))
            .field("alpha_vantage_base_url", &self.alpha_vantage_base_url)
            .field("news_api_base_url", &self.news_api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("news_page_size", &self.news_page_size)
            .field("alpha_vantage_rate_limit", &self.alpha_vantage_rate_limit)
            .finish()
    }
}

impl StockConfig {
    /// Create a new configuration builder
    pub fn builder() -> StockConfigBuilder {
        StockConfigBuilder::default()
    }

    /// Load everything from the environment on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Validate the configuration
    ///
    /// Missing API keys are not an error here; the operation that needs the
    /// key reports it when called.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(StockError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if !(1..=100).contains(&self.news_page_size) {
            return Err(StockError::ConfigError(format!(
                "news_page_size must be between 1 and 100, got {}",
                self.news_page_size
            )));
        }

        if self.alpha_vantage_rate_limit == Some(0) {
            return Err(StockError::ConfigError(
                "alpha_vantage_rate_limit must be greater than 0 when set".to_string(),
            ));
        }

        for (name, url) in [
            ("alpha_vantage_base_url", &self.alpha_vantage_base_url),
            ("news_api_base_url", &self.news_api_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(StockError::ConfigError(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }

        Ok(())
    }
}

/// Builder for StockConfig
#[derive(Default)]
pub struct StockConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    news_api_key: Option<String>,
    alpha_vantage_base_url: Option<String>,
    news_api_base_url: Option<String>,
    request_timeout: Option<Duration>,
    news_page_size: Option<u32>,
    alpha_vantage_rate_limit: Option<u32>,
    env_errors: Vec<String>,
}

impl StockConfigBuilder {
    /// Set Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Point the Alpha Vantage client somewhere else
    pub fn alpha_vantage_base_url(mut self, url: impl Into<String>) -> Self {
        self.alpha_vantage_base_url = Some(url.into());
        self
    }

    /// Point the news client somewhere else
    pub fn news_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.news_api_base_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the number of articles to request
    pub fn news_page_size(mut self, size: u32) -> Self {
        self.news_page_size = Some(size);
        self
    }

    /// Pace Alpha Vantage calls to this many per minute
    pub fn alpha_vantage_rate_limit(mut self, per_minute: u32) -> Self {
        self.alpha_vantage_rate_limit = Some(per_minute);
        self
    }

    /// Fill unset fields from the environment
    ///
    /// Values already set on the builder win over the environment.
    pub fn with_env(mut self) -> Self {
        if self.alpha_vantage_api_key.is_none() {
            self.alpha_vantage_api_key = env_var(ALPHA_VANTAGE_KEY_VAR);
        }
        if self.news_api_key.is_none() {
            self.news_api_key = env_var(NEWS_API_KEY_VAR);
        }
        if self.alpha_vantage_base_url.is_none() {
            self.alpha_vantage_base_url = env_var("ALPHA_VANTAGE_BASE_URL");
        }
        if self.news_api_base_url.is_none() {
            self.news_api_base_url = env_var("NEWS_API_BASE_URL");
        }

        match env_parse::<u64>("STOCK_REQUEST_TIMEOUT_SECS") {
            Ok(Some(secs)) if self.request_timeout.is_none() => {
                self.request_timeout = Some(Duration::from_secs(secs));
            }
            Ok(_) => {}
            Err(e) => self.env_errors.push(e),
        }
        match env_parse::<u32>("STOCK_NEWS_PAGE_SIZE") {
            Ok(Some(size)) if self.news_page_size.is_none() => self.news_page_size = Some(size),
            Ok(_) => {}
            Err(e) => self.env_errors.push(e),
        }
        match env_parse::<u32>("ALPHA_VANTAGE_RATE_LIMIT") {
            Ok(Some(limit)) if self.alpha_vantage_rate_limit.is_none() => {
                self.alpha_vantage_rate_limit = Some(limit);
            }
            Ok(_) => {}
            Err(e) => self.env_errors.push(e),
        }

        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StockConfig> {
        if !self.env_errors.is_empty() {
            return Err(StockError::ConfigError(self.env_errors.join("; ")));
        }

        let defaults = StockConfig::default();

        let config = StockConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            news_api_key: self.news_api_key,
            alpha_vantage_base_url: self
                .alpha_vantage_base_url
                .unwrap_or(defaults.alpha_vantage_base_url),
            news_api_base_url: self.news_api_base_url.unwrap_or(defaults.news_api_base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            news_page_size: self.news_page_size.unwrap_or(defaults.news_page_size),
            alpha_vantage_rate_limit: self.alpha_vantage_rate_limit,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.news_page_size, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.alpha_vantage_rate_limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = StockConfig::builder()
            .alpha_vantage_api_key("av")
            .news_api_key("news")
            .request_timeout(Duration::from_secs(5))
            .news_page_size(10)
            .build()
            .unwrap();

        assert_eq!(config.alpha_vantage_api_key.as_deref(), Some("av"));
        assert_eq!(config.news_api_key.as_deref(), Some("news"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.news_page_size, 10);
    }

    #[test]
    fn test_validation() {
        assert!(
            StockConfig::builder()
                .request_timeout(Duration::ZERO)
                .build()
                .is_err()
        );
        assert!(StockConfig::builder().news_page_size(0).build().is_err());
        assert!(StockConfig::builder().news_page_size(101).build().is_err());
        assert!(
            StockConfig::builder()
                .alpha_vantage_rate_limit(0)
                .build()
                .is_err()
        );
        assert!(
            StockConfig::builder()
                .news_api_base_url("newsapi.org")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = StockConfig::builder()
            .alpha_vantage_api_key("super-secret")
            .build()
            .unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<set>"));
    }
}
