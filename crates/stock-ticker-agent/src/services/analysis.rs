//! Narrative summary from price change and news results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::ToolResult;
use crate::error::Result;
use crate::models::{AnalysisSummary, NewsArticle, PriceChange, Timeframe};

pub(crate) const CONTEXT: &str = "Error in analysis";
pub const NEWS_HEADER: &str = "\nRecent news that might explain the movement:";
const MAX_HEADLINES: usize = 3;

/// The part of a price change the summary reads
///
/// Lets callers pass back a trimmed-down price envelope; extra fields are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceMovement {
    pub percent_change: f64,
    pub timeframe: Timeframe,
}

impl From<&PriceChange> for PriceMovement {
    fn from(change: &PriceChange) -> Self {
        Self {
            percent_change: change.percent_change,
            timeframe: change.timeframe,
        }
    }
}

/// Sentence describing a move; anything not above zero reads as a decrease
pub fn movement_sentence(movement: &PriceMovement) -> String {
    let direction = if movement.percent_change > 0.0 {
        "increased"
    } else {
        "decreased"
    };
    format!(
        "The stock has {direction} by {:.2}% over {}.",
        movement.percent_change.abs(),
        movement.timeframe
    )
}

/// Untitled articles among the first few are skipped; the header only
/// appears when at least one headline is listed.
fn summarize(
    news: &ToolResult<Vec<NewsArticle>>,
    price: &ToolResult<PriceMovement>,
) -> AnalysisSummary {
    let mut lines = Vec::new();

    if let Some(movement) = price.data() {
        lines.push(movement_sentence(movement));
    }

    let headlines: Vec<&str> = news
        .data()
        .into_iter()
        .flatten()
        .take(MAX_HEADLINES)
        .filter_map(NewsArticle::title)
        .collect();
    if !headlines.is_empty() {
        lines.push(NEWS_HEADER.to_string());
        lines.extend(headlines.into_iter().map(|title| format!("- {title}")));
    }

    AnalysisSummary {
        text: lines.join("\n"),
    }
}

/// Combine news and price-change results for `ticker` into one summary
pub fn ticker_analysis(
    ticker: &str,
    news: &ToolResult<Vec<NewsArticle>>,
    price: &ToolResult<PriceChange>,
) -> ToolResult<AnalysisSummary> {
    let price = match price {
        ToolResult::Success { data } => ToolResult::success(PriceMovement::from(data)),
        ToolResult::Error { message } => ToolResult::error(message.clone()),
    };
    tracing::debug!(ticker, "Composing analysis");
    ToolResult::success(summarize(news, &price))
}

fn summarize_json(news: Value, price: Value) -> Result<AnalysisSummary> {
    let news: ToolResult<Vec<NewsArticle>> = serde_json::from_value(news)?;
    let price: ToolResult<PriceMovement> = serde_json::from_value(price)?;
    Ok(summarize(&news, &price))
}

/// Same as [`ticker_analysis`], starting from the JSON envelopes the agent
/// passes back; envelopes that do not parse become analysis errors
pub fn ticker_analysis_from_json(
    ticker: &str,
    news: Value,
    price: Value,
) -> ToolResult<AnalysisSummary> {
    tracing::debug!(ticker, "Composing analysis from JSON envelopes");
    ToolResult::from_result(summarize_json(news, price), CONTEXT)
}
