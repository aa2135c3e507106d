//! Tool for fetching the latest quote

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::services::{StockTicker, quote};
use crate::tools::{normalize_ticker, parse_params, rejected};

/// Fetches the current price, volume and previous close for a ticker
pub struct TickerPriceTool {
    service: Arc<StockTicker>,
}

#[derive(Debug, Deserialize)]
struct TickerPriceParams {
    ticker: String,
}

impl TickerPriceTool {
    pub fn new(service: Arc<StockTicker>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TickerPriceTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let ticker = match parse_params::<TickerPriceParams>(params)
            .and_then(|params| normalize_ticker(&params.ticker))
        {
            Ok(ticker) => ticker,
            Err(e) => return Ok(rejected(e, quote::CONTEXT)),
        };
        Ok(self.service.ticker_price(&ticker).await.to_value())
    }

    fn name(&self) -> &str {
        "ticker_price"
    }

    fn description(&self) -> &str {
        "Fetch the current stock price for a ticker from Alpha Vantage: price, volume, \
         latest trading day and previous close."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "ticker": schema::string("Stock ticker symbol (e.g., 'AAPL')") }),
            vec!["ticker"],
        )
    }
}
