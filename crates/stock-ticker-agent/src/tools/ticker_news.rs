//! Tool for fetching recent news about a ticker

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::services::{StockTicker, news};
use crate::tools::{normalize_ticker, parse_params, rejected};

/// Retrieves recent news articles mentioning a ticker
pub struct TickerNewsTool {
    service: Arc<StockTicker>,
}

#[derive(Debug, Deserialize)]
struct TickerNewsParams {
    ticker: String,
}

impl TickerNewsTool {
    pub fn new(service: Arc<StockTicker>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TickerNewsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let ticker = match parse_params::<TickerNewsParams>(params)
            .and_then(|params| normalize_ticker(&params.ticker))
        {
            Ok(ticker) => ticker,
            Err(e) => return Ok(rejected(e, news::CONTEXT)),
        };
        Ok(self.service.ticker_news(&ticker).await.to_value())
    }

    fn name(&self) -> &str {
        "ticker_news"
    }

    fn description(&self) -> &str {
        "Retrieve the most recent English news articles about a stock ticker from \
         NewsAPI, newest first. Articles are returned as the provider sent them."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "ticker": schema::string("Stock ticker symbol") }),
            vec!["ticker"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCompanyDirectory, MockMarketData, MockNewsSource};
    use crate::services::testing::stock_ticker;

    #[tokio::test]
    async fn test_execute() {
        let mut news = MockNewsSource::new();
        news.expect_everything()
            .withf(|query| query.q == "PLTR stock")
            .returning(|_| Ok(json!({"status": "ok", "articles": [{"title": "Palantir wins contract"}]})));
        let tool = TickerNewsTool::new(Arc::new(stock_ticker(
            MockCompanyDirectory::new(),
            MockMarketData::new(),
            news,
        )));

        let result = tool.execute(json!({"ticker": "pltr"})).await.unwrap();
        assert_eq!(
            result,
            json!({"status": "success", "data": [{"title": "Palantir wins contract"}]})
        );
    }

    #[tokio::test]
    async fn test_wrong_argument_type() {
        let mut news = MockNewsSource::new();
        news.expect_everything().never();
        let tool = TickerNewsTool::new(Arc::new(stock_ticker(
            MockCompanyDirectory::new(),
            MockMarketData::new(),
            news,
        )));

        let result = tool.execute(json!({"ticker": 42})).await.unwrap();
        assert_eq!(result["status"], "error");
        assert!(
            result["error_message"]
                .as_str()
                .unwrap()
                .starts_with("Error fetching news: Invalid arguments: invalid type")
        );
    }
}
