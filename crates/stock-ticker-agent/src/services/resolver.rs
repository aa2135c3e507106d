//! Free-text company reference to ticker symbol

use serde_json::Value;

use crate::api::{CompanyDirectory, MarketData};
use crate::envelope::ToolResult;
use crate::error::{Result, StockError};
use crate::models::TickerIdentity;

pub const NOT_FOUND: &str = "Could not find matching ticker symbol";
pub(crate) const CONTEXT: &str = "Error in ticker identification";

/// Normalize a user query before searching
///
/// Lower-cases, removes every occurrence of `stock` and trims. Words that
/// merely contain `stock` are mangled too ("Stockholm" becomes "holm").
pub fn clean_query(query: &str) -> String {
    query.to_lowercase().replace("stock", "").trim().to_string()
}

/// Outcome of walking the directory's candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateScan {
    /// First candidate with a non-empty long name
    Found(TickerIdentity),
    /// The directory returned no candidates
    NoCandidates,
    /// Every candidate was skipped, `failures` of them because the lookup failed
    Exhausted { candidates: usize, failures: usize },
}

/// Try candidates in order, skipping any whose metadata lookup fails
pub async fn scan_candidates(
    directory: &dyn CompanyDirectory,
    candidates: &[String],
) -> CandidateScan {
    if candidates.is_empty() {
        return CandidateScan::NoCandidates;
    }

    let mut failures = 0;
    for symbol in candidates {
        match directory.long_name(symbol).await {
            Ok(Some(name)) if !name.trim().is_empty() => {
                return CandidateScan::Found(TickerIdentity::new(symbol.clone(), name));
            }
            Ok(_) => tracing::debug!(%symbol, "Candidate has no long name, skipping"),
            Err(e) => {
                failures += 1;
                tracing::debug!(%symbol, error = %e, "Candidate lookup failed, skipping");
            }
        }
    }

    CandidateScan::Exhausted {
        candidates: candidates.len(),
        failures,
    }
}

/// Pull the first `bestMatches` entry out of a symbol-search response
pub fn first_best_match(body: &Value) -> Result<Option<TickerIdentity>> {
    let Some(first) = body
        .get("bestMatches")
        .and_then(Value::as_array)
        .and_then(|matches| matches.first())
    else {
        return Ok(None);
    };

    let field = |key: &str| {
        first
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| StockError::missing(key))
    };

    Ok(Some(TickerIdentity::new(field("1. symbol")?, field("2. name")?)))
}

async fn resolve(
    directory: &dyn CompanyDirectory,
    market: &dyn MarketData,
    query: &str,
) -> Result<TickerIdentity> {
    let cleaned = clean_query(query);
    if cleaned.is_empty() {
        return Err(StockError::NotFound(NOT_FOUND.to_string()));
    }

    match directory.search(&cleaned).await {
        Ok(candidates) => match scan_candidates(directory, &candidates).await {
            CandidateScan::Found(identity) => return Ok(identity),
            outcome => tracing::debug!(query = %cleaned, ?outcome, "Directory search gave nothing usable"),
        },
        Err(e) => {
            tracing::warn!(query = %cleaned, error = %e, "Directory search failed, using fallback");
        }
    }

    let body = market.symbol_search(&cleaned).await?;
    first_best_match(&body)?.ok_or_else(|| StockError::NotFound(NOT_FOUND.to_string()))
}

/// Resolve a company reference such as "Tesla stock" to a ticker
pub async fn identify_ticker(
    directory: &dyn CompanyDirectory,
    market: &dyn MarketData,
    query: &str,
) -> ToolResult<TickerIdentity> {
    let result = resolve(directory, market, query).await;
    if let Ok(identity) = &result {
        tracing::info!(query, ticker = %identity.symbol, "Identified ticker");
    }
    ToolResult::from_result(result, CONTEXT)
}
