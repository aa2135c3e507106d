//! Error types for stock ticker operations

use thiserror::Error;

/// Stock ticker specific errors
///
/// `NotFound` means the provider answered but had nothing for the request.
/// Every other variant is an upstream failure of some kind.
#[derive(Debug, Error)]
pub enum StockError {
    /// Requested entity absent from an otherwise successful response
    #[error("{0}")]
    NotFound(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Alpha Vantage reported an error in its response body
    #[error("Alpha Vantage error: {0}")]
    AlphaVantageError(String),

    /// Rate limit exceeded for API
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    /// NewsAPI reported an error in its response body
    #[error("News API error: {0}")]
    NewsApiError(String),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// Provider response did not have the expected structure
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A numeric field could not be parsed
    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// A date field could not be parsed
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Time series too short for the requested window
    #[error("Not enough history: need {needed} trading days, have {available}")]
    InsufficientHistory { needed: usize, available: usize },

    /// Percent change is undefined for a zero start price
    #[error("Start price on {date} is zero; percent change is undefined")]
    ZeroStartPrice { date: String },

    /// Unknown timeframe name
    #[error("Invalid timeframe: {0:?} (expected today, week or month)")]
    InvalidTimeframe(String),

    /// Tool arguments that do not match the tool's schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider call did not finish in time
    #[error("{provider} request timed out after {seconds}s")]
    Timeout { provider: String, seconds: u64 },
}

impl StockError {
    /// Missing-field shorthand used by the response parsers
    pub(crate) fn missing(field: &str) -> Self {
        Self::UnexpectedShape(format!("missing field {field:?}"))
    }

    /// Whether this is a "provider has no data" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;

/// Convert StockError to agent_core::Error
impl From<StockError> for agent_core::Error {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InvalidTimeframe(_) | StockError::InvalidArguments(_) => {
                agent_core::Error::InvalidParameters(err.to_string())
            }
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StockError::NotFound("No price data available".to_string());
        assert_eq!(err.to_string(), "No price data available");
        assert!(err.is_not_found());

        let err = StockError::InvalidNumber {
            field: "05. price".to_string(),
            value: "n/a".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number in 05. price: \"n/a\"");
        assert!(!err.is_not_found());

        let err = StockError::InsufficientHistory {
            needed: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Not enough history: need 2 trading days, have 1"
        );

        let err = StockError::Timeout {
            provider: "Yahoo Finance".to_string(),
            seconds: 30,
        };
        assert_eq!(err.to_string(), "Yahoo Finance request timed out after 30s");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_conversion() {
        let agent_err: agent_core::Error = StockError::InvalidTimeframe("year".to_string()).into();
        assert!(matches!(agent_err, agent_core::Error::InvalidParameters(_)));

        let agent_err: agent_core::Error = StockError::missing("articles").into();
        match agent_err {
            agent_core::Error::ProcessingFailed(msg) => {
                assert!(msg.contains("articles"));
            }
            _ => panic!("Expected ProcessingFailed variant"),
        }
    }
}
