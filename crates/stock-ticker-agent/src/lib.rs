//! Stock ticker tools for LLM agents
//!
//! Five operations an agent can call while answering questions about a
//! stock:
//!
//! - `identify_ticker`: company name or free text to ticker symbol
//!   (Yahoo Finance search, Alpha Vantage symbol search as fallback)
//! - `ticker_price`: latest quote from Alpha Vantage
//! - `ticker_price_change`: close-to-close percent change over today, a
//!   week or a month of trading days
//! - `ticker_news`: recent articles from NewsAPI
//! - `ticker_analysis`: one-paragraph summary of a price change and news
//!
//! Every operation returns a [`ToolResult`] envelope. Upstream failures are
//! reported inside the envelope and never escape as errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_ticker_agent::{StockConfig, StockTicker, Timeframe};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(StockConfig::from_env()?);
//!     let stocks = StockTicker::new(config)?;
//!
//!     let change = stocks.ticker_price_change("TSLA", Timeframe::Week).await;
//!     let news = stocks.ticker_news("TSLA").await;
//!     let summary = stocks.ticker_analysis("TSLA", &news, &change);
//!     println!("{}", serde_json::to_string_pretty(&summary)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod services;
pub mod tools;

pub use config::StockConfig;
pub use envelope::ToolResult;
pub use error::{Result, StockError};
pub use models::{
    AnalysisSummary, NewsArticle, PriceChange, Quote, TickerIdentity, Timeframe,
};
pub use services::StockTicker;
pub use tools::registry;
