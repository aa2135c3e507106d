//! Provider clients and the seams the services talk through
//!
//! Each trait covers exactly the calls the tools make. Clients return the
//! provider's JSON after stripping provider-level error bodies; turning that
//! JSON into typed records is the job of [`crate::services`].

pub mod alpha_vantage;
pub mod news_api;
pub mod yahoo;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub use alpha_vantage::AlphaVantageClient;
pub use news_api::NewsApiClient;
pub use yahoo::YahooFinanceClient;

/// Keyless ticker search with per-symbol metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Candidate ticker symbols for a free-text company reference
    async fn search(&self, query: &str) -> Result<Vec<String>>;

    /// Long display name for a symbol, if the directory knows one
    async fn long_name(&self, symbol: &str) -> Result<Option<String>>;
}

/// Keyed market-data endpoints (symbol search, quote, daily series)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn symbol_search(&self, keywords: &str) -> Result<Value>;

    async fn global_quote(&self, symbol: &str) -> Result<Value>;

    async fn daily_series(&self, symbol: &str) -> Result<Value>;
}

/// Query parameters for a news search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsQuery {
    pub q: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: u32,
}

impl NewsQuery {
    /// English articles about `ticker`, newest first
    pub fn for_ticker(ticker: &str, page_size: u32) -> Self {
        Self {
            q: format!("{ticker} stock"),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            page_size,
        }
    }
}

/// Keyword news search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn everything(&self, query: &NewsQuery) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_news_query_parameters() {
        let query = NewsQuery::for_ticker("TSLA", 5);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "q": "TSLA stock",
                "language": "en",
                "sortBy": "publishedAt",
                "pageSize": 5
            })
        );
    }
}
