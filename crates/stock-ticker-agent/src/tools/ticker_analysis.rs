//! Tool for summarizing price change and news

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::services::{StockTicker, analysis};
use crate::tools::{parse_params, rejected};

/// Summarizes a price-change result and a news result into one text
pub struct TickerAnalysisTool {
    service: Arc<StockTicker>,
}

#[derive(Debug, Deserialize)]
struct TickerAnalysisParams {
    ticker: String,
    news_data: Value,
    price_data: Value,
}

impl TickerAnalysisTool {
    pub fn new(service: Arc<StockTicker>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TickerAnalysisTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: TickerAnalysisParams = match parse_params(params) {
            Ok(params) => params,
            Err(e) => return Ok(rejected(e, analysis::CONTEXT)),
        };
        Ok(self
            .service
            .ticker_analysis_from_json(params.ticker.trim(), params.news_data, params.price_data)
            .to_value())
    }

    fn name(&self) -> &str {
        "ticker_analysis"
    }

    fn description(&self) -> &str {
        "Summarize stock performance from the results of ticker_price_change and \
         ticker_news: states the percent move and lists up to three recent headlines."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "news_data": schema::any_object("Result returned by ticker_news"),
                "price_data": schema::any_object("Result returned by ticker_price_change"),
            }),
            vec!["ticker", "news_data", "price_data"],
        )
    }
}
