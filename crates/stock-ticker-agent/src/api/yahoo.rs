//! Yahoo Finance ticker search

use crate::api::CompanyDirectory;
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use async_trait::async_trait;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use yahoo_finance_api as yahoo;

const PROVIDER: &str = "Yahoo Finance";

/// Yahoo Finance search client
///
/// Needs no API key. The library call is wrapped in the configured timeout.
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    timeout: Duration,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new(config: &StockConfig) -> Self {
        Self {
            timeout: config.request_timeout,
        }
    }

    async fn search_quotes(&self, query: &str) -> Result<Vec<yahoo::YQuoteItem>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| StockError::YahooFinanceError(e.to_string()))?;

        let response = bounded(self.timeout, provider.search_ticker(query)).await?;
        Ok(response.quotes)
    }
}

/// Run a library call under `timeout`, mapping both failure kinds
async fn bounded<T, E: Display>(
    timeout: Duration,
    call: impl Future<Output = std::result::Result<T, E>>,
) -> Result<T> {
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| StockError::Timeout {
            provider: PROVIDER.to_string(),
            seconds: timeout.as_secs(),
        })?
        .map_err(|e| StockError::YahooFinanceError(e.to_string()))
}

/// First non-blank long name among quotes for exactly `symbol`
fn long_name_for(quotes: &[yahoo::YQuoteItem], symbol: &str) -> Option<String> {
    quotes
        .iter()
        .filter(|quote| quote.symbol.eq_ignore_ascii_case(symbol))
        .map(|quote| quote.long_name.trim())
        .find(|name| !name.is_empty())
        .map(ToString::to_string)
}

#[async_trait]
impl CompanyDirectory for YahooFinanceClient {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let quotes = self.search_quotes(query).await?;
        Ok(quotes.into_iter().map(|quote| quote.symbol).collect())
    }

    async fn long_name(&self, symbol: &str) -> Result<Option<String>> {
        let quotes = self.search_quotes(symbol).await?;
        Ok(long_name_for(&quotes, symbol))
    }
}
