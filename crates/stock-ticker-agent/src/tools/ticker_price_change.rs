//! Tool for percent change over a timeframe

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::error::Result;
use crate::models::Timeframe;
use crate::services::{StockTicker, price_change};
use crate::tools::{normalize_ticker, parse_params, rejected};

/// Calculates the close-to-close change over today, the last week or month
pub struct TickerPriceChangeTool {
    service: Arc<StockTicker>,
}

#[derive(Debug, Deserialize)]
struct TickerPriceChangeParams {
    ticker: String,
    #[serde(default)]
    timeframe: Option<String>,
}

impl TickerPriceChangeParams {
    /// Normalized ticker and timeframe; a missing timeframe means today
    fn resolve(&self) -> Result<(String, Timeframe)> {
        let ticker = normalize_ticker(&self.ticker)?;
        let timeframe = match self.timeframe.as_deref() {
            Some(raw) => raw.parse::<Timeframe>()?,
            None => Timeframe::default(),
        };
        Ok((ticker, timeframe))
    }
}

impl TickerPriceChangeTool {
    pub fn new(service: Arc<StockTicker>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for TickerPriceChangeTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let (ticker, timeframe) = match parse_params::<TickerPriceChangeParams>(params)
            .and_then(|params| params.resolve())
        {
            Ok(resolved) => resolved,
            Err(e) => return Ok(rejected(e, price_change::CONTEXT)),
        };

        Ok(self
            .service
            .ticker_price_change(&ticker, timeframe)
            .await
            .to_value())
    }

    fn name(&self) -> &str {
        "ticker_price_change"
    }

    fn description(&self) -> &str {
        "Calculate the percent change in closing price over a timeframe using daily \
         data. 'today' compares with the previous trading day; 'week' and 'month' look \
         back 7 and 30 trading days."
    }

    fn input_schema(&self) -> Value {
        let timeframes: Vec<&str> = Timeframe::ALL.into_iter().map(Timeframe::as_str).collect();
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol (e.g., 'TSLA')"),
                "timeframe": schema::string_enum(
                    "Window to measure the change over",
                    &timeframes,
                    Timeframe::default().as_str(),
                ),
            }),
            vec!["ticker"],
        )
    }
}
