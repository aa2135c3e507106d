//! Core types for the stock ticker tool workspace
//!
//! Holds the error type returned by the tool framework when a call cannot be
//! dispatched at all (unknown tool, malformed arguments). Domain failures are
//! reported inside each tool's result envelope instead.

pub mod error;

pub use error::{Error, Result};
