//! The five operations, each returning a [`ToolResult`] envelope
//!
//! Every operation makes at most one upstream call per source, converts any
//! failure at its own boundary and never returns a bare error.

pub mod analysis;
pub mod news;
pub mod price_change;
pub mod quote;
pub mod resolver;

mod parse;

use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    AlphaVantageClient, CompanyDirectory, MarketData, NewsApiClient, NewsSource,
    YahooFinanceClient,
};
use crate::config::StockConfig;
use crate::envelope::ToolResult;
use crate::error::Result;
use crate::models::{AnalysisSummary, NewsArticle, PriceChange, Quote, TickerIdentity, Timeframe};

/// Provider clients plus configuration, shared by all tools
#[derive(Clone)]
pub struct StockTicker {
    config: Arc<StockConfig>,
    directory: Arc<dyn CompanyDirectory>,
    market: Arc<dyn MarketData>,
    news: Arc<dyn NewsSource>,
}

impl StockTicker {
    /// Build the real provider clients from `config`
    pub fn new(config: Arc<StockConfig>) -> Result<Self> {
        config.validate()?;
        let directory = Arc::new(YahooFinanceClient::new(&config));
        let market = Arc::new(AlphaVantageClient::new(&config)?);
        let news = Arc::new(NewsApiClient::new(&config)?);
        Ok(Self::with_sources(config, directory, market, news))
    }

    /// Assemble from explicit sources
    pub fn with_sources(
        config: Arc<StockConfig>,
        directory: Arc<dyn CompanyDirectory>,
        market: Arc<dyn MarketData>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            config,
            directory,
            market,
            news,
        }
    }

    pub fn config(&self) -> &StockConfig {
        &self.config
    }

    pub async fn identify_ticker(&self, query: &str) -> ToolResult<TickerIdentity> {
        resolver::identify_ticker(self.directory.as_ref(), self.market.as_ref(), query).await
    }

    pub async fn ticker_price(&self, ticker: &str) -> ToolResult<Quote> {
        quote::ticker_price(self.market.as_ref(), ticker).await
    }

    pub async fn ticker_price_change(
        &self,
        ticker: &str,
        timeframe: Timeframe,
    ) -> ToolResult<PriceChange> {
        price_change::ticker_price_change(self.market.as_ref(), ticker, timeframe).await
    }

    pub async fn ticker_news(&self, ticker: &str) -> ToolResult<Vec<NewsArticle>> {
        news::ticker_news(self.news.as_ref(), ticker, self.config.news_page_size).await
    }

    pub fn ticker_analysis(
        &self,
        ticker: &str,
        news: &ToolResult<Vec<NewsArticle>>,
        price: &ToolResult<PriceChange>,
    ) -> ToolResult<AnalysisSummary> {
        analysis::ticker_analysis(ticker, news, price)
    }

    pub fn ticker_analysis_from_json(
        &self,
        ticker: &str,
        news: Value,
        price: Value,
    ) -> ToolResult<AnalysisSummary> {
        analysis::ticker_analysis_from_json(ticker, news, price)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCompanyDirectory, MockMarketData, MockNewsSource};
    use serde_json::json;

    #[test]
    fn test_new_with_default_config() {
        let ticker = StockTicker::new(Arc::new(StockConfig::default())).unwrap();
        assert_eq!(ticker.config().news_page_size, 5);
    }

    #[tokio::test]
    async fn test_news_uses_configured_page_size() {
        let mut news = MockNewsSource::new();
        news.expect_everything()
            .withf(|query| query.page_size == 5)
            .returning(|_| Ok(json!({"articles": []})));
        let service = testing::stock_ticker(MockCompanyDirectory::new(), MockMarketData::new(), news);

        assert_eq!(service.ticker_news("NVDA").await, ToolResult::success(vec![]));
    }

    #[tokio::test]
    async fn test_end_to_end_flow() {
        let mut directory = MockCompanyDirectory::new();
        directory
            .expect_search()
            .returning(|_| Ok(vec!["TSLA".to_string()]));
        directory
            .expect_long_name()
            .returning(|_| Ok(Some("Tesla, Inc.".to_string())));

        let mut market = MockMarketData::new();
        market.expect_daily_series().returning(|_| {
            Ok(json!({
                "Time Series (Daily)": {
                    "2024-01-10": {"4. close": "90.0000"},
                    "2024-01-09": {"4. close": "100.0000"}
                }
            }))
        });

        let mut news = MockNewsSource::new();
        news.expect_everything().returning(|_| {
            Ok(json!({"status": "ok", "articles": [{"title": "Tesla cuts prices again"}]}))
        });

        let service = testing::stock_ticker(directory, market, news);

        let identity = service.identify_ticker("why did Tesla stock drop today?").await;
        let symbol = identity.data().unwrap().symbol.clone();
        assert_eq!(symbol, "TSLA");

        let price = service.ticker_price_change(&symbol, Timeframe::Today).await;
        let headlines = service.ticker_news(&symbol).await;
        let summary = service.ticker_analysis(&symbol, &headlines, &price);

        assert_eq!(
            summary.data().unwrap().text,
            "The stock has decreased by 10.00% over today.\n\nRecent news that might explain the movement:\n- Tesla cuts prices again"
        );
    }
}
