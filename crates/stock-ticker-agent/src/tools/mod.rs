//! Tool adapters exposing the operations to an agent runtime
//!
//! Each tool parses its JSON arguments, runs one operation and returns the
//! operation's envelope as JSON. Arguments that do not fit come back as an
//! error envelope under the operation's prefix, so `execute` itself does not
//! fail.

pub mod identify_ticker;
pub mod ticker_analysis;
pub mod ticker_news;
pub mod ticker_price;
pub mod ticker_price_change;

pub use identify_ticker::IdentifyTickerTool;
pub use ticker_analysis::TickerAnalysisTool;
pub use ticker_news::TickerNewsTool;
pub use ticker_price::TickerPriceTool;
pub use ticker_price_change::TickerPriceChangeTool;

use agent_tools::ToolRegistry;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::envelope::ToolResult;
use crate::error::{Result, StockError};
use crate::services::StockTicker;

/// Registry holding all five stock tools
pub fn registry(service: Arc<StockTicker>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(IdentifyTickerTool::new(Arc::clone(&service))));
    registry.register(Arc::new(TickerNewsTool::new(Arc::clone(&service))));
    registry.register(Arc::new(TickerPriceTool::new(Arc::clone(&service))));
    registry.register(Arc::new(TickerPriceChangeTool::new(Arc::clone(&service))));
    registry.register(Arc::new(TickerAnalysisTool::new(service)));
    registry
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| StockError::InvalidArguments(e.to_string()))
}

/// Upper-cased, trimmed ticker; blank is rejected
fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(StockError::InvalidArguments(
            "ticker must not be empty".to_string(),
        ));
    }
    Ok(ticker.to_uppercase())
}

/// Error envelope for arguments the operation never got to see
fn rejected(err: StockError, context: &str) -> Value {
    ToolResult::<()>::from_result(Err(err), context).to_value()
}
