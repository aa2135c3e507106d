//! Normalized records produced by the tools

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::StockError;

/// A resolved ticker symbol and the company it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerIdentity {
    #[serde(rename = "ticker")]
    pub symbol: String,
    pub company_name: String,
}

impl TickerIdentity {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }
}

/// Most recent quote for a ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub volume: u64,
    pub trading_day: NaiveDate,
    pub previous_close: f64,
}

/// Window over which percent change is measured, in trading days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Latest close against the previous trading day
    #[default]
    Today,
    /// Up to 7 trading days back
    Week,
    /// Up to 30 trading days back
    Month,
}

impl Timeframe {
    pub const ALL: [Self; 3] = [Self::Today, Self::Week, Self::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Index of the start entry in a most-recent-first series of `len` entries
    ///
    /// `today` always uses index 1; `week` and `month` clamp to the oldest
    /// entry with `min(N, len - 1)`. Returns `None` when the series is too
    /// short for the window.
    pub fn start_index(self, len: usize) -> Option<usize> {
        match self {
            Self::Today => (len >= 2).then_some(1),
            Self::Week => len.checked_sub(1).map(|last| last.min(7)),
            Self::Month => len.checked_sub(1).map(|last| last.min(30)),
        }
    }

    /// Minimum number of entries `start_index` needs
    pub fn min_entries(self) -> usize {
        match self {
            Self::Today => 2,
            Self::Week | Self::Month => 1,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(StockError::InvalidTimeframe(s.to_string())),
        }
    }
}

/// Close-to-close change over a timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_price: f64,
    pub end_price: f64,
    pub percent_change: f64,
    pub timeframe: Timeframe,
}

/// A news article exactly as the news provider returned it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsArticle(pub Map<String, Value>);

impl NewsArticle {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

/// Narrative summary built from price change and news
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(rename = "analysis")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timeframe_start_index() {
        assert_eq!(Timeframe::Today.start_index(40), Some(1));
        assert_eq!(Timeframe::Today.start_index(1), None);
        assert_eq!(Timeframe::Week.start_index(40), Some(7));
        assert_eq!(Timeframe::Week.start_index(3), Some(2));
        assert_eq!(Timeframe::Month.start_index(40), Some(30));
        assert_eq!(Timeframe::Month.start_index(12), Some(11));
        assert_eq!(Timeframe::Month.start_index(1), Some(0));
        assert_eq!(Timeframe::Week.start_index(0), None);
    }

    #[test]
    fn test_timeframe_parsing() {
        assert_eq!("week".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert_eq!(" Month ".parse::<Timeframe>().unwrap(), Timeframe::Month);
        assert!("year".parse::<Timeframe>().is_err());
        assert_eq!(Timeframe::default(), Timeframe::Today);
        assert_eq!(json!(Timeframe::Week), json!("week"));
    }

    #[test]
    fn test_identity_wire_keys() {
        let identity = TickerIdentity::new("TSLA", "Tesla, Inc.");
        assert_eq!(
            json!(identity),
            json!({"ticker": "TSLA", "company_name": "Tesla, Inc."})
        );
    }

    #[test]
    fn test_price_change_dates_serialize_as_iso() {
        let change = PriceChange {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_price: 100.0,
            end_price: 110.0,
            percent_change: 10.0,
            timeframe: Timeframe::Today,
        };
        let value = json!(change);
        assert_eq!(value["start_date"], "2024-01-09");
        assert_eq!(value["end_date"], "2024-01-10");
        assert_eq!(value["timeframe"], "today");
    }

    #[test]
    fn test_news_article_is_pass_through() {
        let raw = json!({
            "title": "Tesla shares slide",
            "source": {"id": null, "name": "Reuters"},
            "publishedAt": "2024-01-10T14:00:00Z",
            "urlToImage": null
        });
        let article: NewsArticle = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(article.title(), Some("Tesla shares slide"));
        assert_eq!(json!(article), raw);
    }
}
