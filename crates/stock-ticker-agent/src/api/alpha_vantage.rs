//! Alpha Vantage API client

use crate::api::MarketData;
use crate::config::{ALPHA_VANTAGE_KEY_VAR, StockConfig};
use crate::error::{Result, StockError};
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const PROVIDER: &str = "Alpha Vantage";

/// Alpha Vantage API client
///
/// Authenticates with the `apikey` query parameter. A missing key is reported
/// per call as a configuration error.
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    rate_limiter: Option<SharedRateLimiter>,
}

impl AlphaVantageClient {
    /// Create a client from the shared configuration
    pub fn new(config: &StockConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        let rate_limiter = config
            .alpha_vantage_rate_limit
            .and_then(NonZeroU32::new)
            .map(|per_minute| Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))));

        Ok(Self {
            client,
            base_url: config.alpha_vantage_base_url.clone(),
            api_key: config.alpha_vantage_api_key.clone(),
            rate_limiter,
        })
    }

    /// Run one `function=...` query and return the checked JSON body
    async fn query(&self, function: &str, params: &[(&str, &str)]) -> Result<Value> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            StockError::ConfigError(format!("{ALPHA_VANTAGE_KEY_VAR} is not set"))
        })?;

        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let mut query = Vec::with_capacity(params.len() + 2);
        query.push(("function", function));
        query.extend_from_slice(params);
        query.push(("apikey", api_key));

        tracing::debug!(function, ?params, "Alpha Vantage request");

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(without_url)?;

        let data: Value = response.json().await.map_err(without_url)?;
        check_error_body(data)
    }
}

/// Drop the request URL from a transport error; it carries the API key.
fn without_url(err: reqwest::Error) -> StockError {
    StockError::NetworkError(err.without_url())
}

/// Turn Alpha Vantage's in-band error bodies into errors
///
/// The API answers HTTP 200 with `Error Message`, `Note` or `Information`
/// keys when the call was rejected.
fn check_error_body(data: Value) -> Result<Value> {
    if let Some(error) = data.get("Error Message") {
        return Err(StockError::AlphaVantageError(text_of(error)));
    }

    if data.get("Note").is_some() {
        return Err(StockError::RateLimitExceeded {
            provider: PROVIDER.to_string(),
        });
    }

    if let Some(info) = data.get("Information") {
        let info = text_of(info);
        if info.to_ascii_lowercase().contains("rate limit") {
            return Err(StockError::RateLimitExceeded {
                provider: PROVIDER.to_string(),
            });
        }
        return Err(StockError::AlphaVantageError(info));
    }

    Ok(data)
}

fn text_of(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

#[async_trait]
impl MarketData for AlphaVantageClient {
    async fn symbol_search(&self, keywords: &str) -> Result<Value> {
        self.query("SYMBOL_SEARCH", &[("keywords", keywords)]).await
    }

    async fn global_quote(&self, symbol: &str) -> Result<Value> {
        self.query("GLOBAL_QUOTE", &[("symbol", symbol)]).await
    }

    async fn daily_series(&self, symbol: &str) -> Result<Value> {
        self.query("TIME_SERIES_DAILY", &[("symbol", symbol)]).await
    }
}
