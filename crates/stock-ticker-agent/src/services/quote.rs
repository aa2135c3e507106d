//! Latest quote for a ticker

use serde_json::Value;

use crate::api::MarketData;
use crate::envelope::ToolResult;
use crate::error::{Result, StockError};
use crate::models::Quote;
use crate::services::parse::{date, number_field, str_field};

pub const NOT_FOUND: &str = "No price data available";
pub(crate) const CONTEXT: &str = "Error fetching price";

/// Normalize a `GLOBAL_QUOTE` response
///
/// A missing or empty `Global Quote` object means the provider has nothing
/// for the symbol.
pub fn parse_global_quote(body: &Value) -> Result<Quote> {
    let quote = body
        .get("Global Quote")
        .filter(|quote| quote.as_object().is_some_and(|fields| !fields.is_empty()))
        .ok_or_else(|| StockError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Quote {
        price: number_field(quote, "05. price")?,
        volume: number_field(quote, "06. volume")?,
        trading_day: date(str_field(quote, "07. latest trading day")?)?,
        previous_close: number_field(quote, "08. previous close")?,
    })
}

async fn fetch_quote(market: &dyn MarketData, ticker: &str) -> Result<Quote> {
    let body = market.global_quote(ticker).await?;
    parse_global_quote(&body)
}

/// Fetch the most recent quote for `ticker`
pub async fn ticker_price(market: &dyn MarketData, ticker: &str) -> ToolResult<Quote> {
    ToolResult::from_result(fetch_quote(market, ticker).await, CONTEXT)
}
