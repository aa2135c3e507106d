//! Percent change over a trading-day window

use chrono::NaiveDate;
use serde_json::Value;

use crate::api::MarketData;
use crate::envelope::ToolResult;
use crate::error::{Result, StockError};
use crate::models::{PriceChange, Timeframe};
use crate::services::parse::{date, number_field};

pub const NOT_FOUND: &str = "No historical data available";
pub(crate) const CONTEXT: &str = "Error calculating price change";
const SERIES_KEY: &str = "Time Series (Daily)";
const CLOSE_KEY: &str = "4. close";

/// One trading day of a daily series; the OHLC fields stay unparsed
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry<'a> {
    pub date: NaiveDate,
    pub fields: &'a Value,
}

impl DailyEntry<'_> {
    fn close(&self) -> Result<f64> {
        number_field(self.fields, CLOSE_KEY)
    }
}

/// Entries of a `TIME_SERIES_DAILY` response, most recent first
pub fn daily_entries<'a>(body: &'a Value) -> Result<Vec<DailyEntry<'a>>> {
    let series = body
        .get(SERIES_KEY)
        .ok_or_else(|| StockError::NotFound(NOT_FOUND.to_string()))?
        .as_object()
        .ok_or_else(|| StockError::UnexpectedShape(format!("{SERIES_KEY:?} is not an object")))?;

    let mut entries = series
        .iter()
        .map(|(day, fields)| -> Result<DailyEntry<'a>> {
            Ok(DailyEntry {
                date: date(day)?,
                fields,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

/// `(end - start) / start * 100`, refusing a zero start price
pub fn percent_change(start: f64, end: f64, start_date: NaiveDate) -> Result<f64> {
    if start == 0.0 {
        return Err(StockError::ZeroStartPrice {
            date: start_date.to_string(),
        });
    }
    Ok((end - start) / start * 100.0)
}

/// Compute the change for `timeframe` over a most-recent-first series
pub fn compute_change(entries: &[DailyEntry<'_>], timeframe: Timeframe) -> Result<PriceChange> {
    let insufficient = || StockError::InsufficientHistory {
        needed: timeframe.min_entries(),
        available: entries.len(),
    };
    let start = timeframe
        .start_index(entries.len())
        .and_then(|index| entries.get(index))
        .ok_or_else(insufficient)?;
    let end = entries.first().ok_or_else(insufficient)?;

    let start_price = start.close()?;
    let end_price = end.close()?;

    Ok(PriceChange {
        start_date: start.date,
        end_date: end.date,
        start_price,
        end_price,
        percent_change: percent_change(start_price, end_price, start.date)?,
        timeframe,
    })
}

async fn fetch_change(
    market: &dyn MarketData,
    ticker: &str,
    timeframe: Timeframe,
) -> Result<PriceChange> {
    let body = market.daily_series(ticker).await?;
    let entries = daily_entries(&body)?;
    compute_change(&entries, timeframe)
}

/// Percent change in closing price for `ticker` over `timeframe`
pub async fn ticker_price_change(
    market: &dyn MarketData,
    ticker: &str,
    timeframe: Timeframe,
) -> ToolResult<PriceChange> {
    ToolResult::from_result(fetch_change(market, ticker, timeframe).await, CONTEXT)
}
