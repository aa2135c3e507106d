//! Shared utilities for the stock ticker workspace
//!
//! Logging setup and small helpers for reading configuration from the
//! process environment.

pub mod config;
pub mod logging;

pub use logging::{LogFormat, init_tracing, init_tracing_with};
