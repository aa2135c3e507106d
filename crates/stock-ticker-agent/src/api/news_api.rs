//! NewsAPI client for keyword news search

use crate::api::{NewsQuery, NewsSource};
use crate::config::{NEWS_API_KEY_VAR, StockConfig};
use crate::error::{Result, StockError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// NewsAPI `/v2/everything` client
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    /// Create a client from the shared configuration
    pub fn new(config: &StockConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.news_api_base_url.clone(),
            api_key: config.news_api_key.clone(),
        })
    }
}

/// NewsAPI reports failures as `{"status": "error", "code": ..., "message": ...}`,
/// usually alongside a 4xx status, so the body is read before the status.
fn check_error_body(data: Value) -> Result<Value> {
    if data.get("status").and_then(Value::as_str) == Some("error") {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| data.get("code").and_then(Value::as_str))
            .unwrap_or("unknown error");
        return Err(StockError::NewsApiError(message.to_string()));
    }
    Ok(data)
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn everything(&self, query: &NewsQuery) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| StockError::ConfigError(format!("{NEWS_API_KEY_VAR} is not set")))?;

        tracing::debug!(q = %query.q, page_size = query.page_size, "NewsAPI request");

        let response = self
            .client
            .get(&self.base_url)
            .header("X-Api-Key", api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(_) if !status.is_success() => {
                return Err(StockError::NewsApiError(format!("HTTP error: {status}")));
            }
            Err(e) => return Err(e.into()),
        };

        let data = check_error_body(data)?;
        if !status.is_success() {
            return Err(StockError::NewsApiError(format!("HTTP error: {status}")));
        }
        Ok(data)
    }
}
