//! Field parsers for Alpha Vantage's string-typed JSON values

use chrono::NaiveDate;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{Result, StockError};

/// String value at `key`, or an unexpected-shape error
pub fn str_field<'a>(object: &'a Value, key: &str) -> Result<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| StockError::missing(key))
}

/// Number carried as a string at `key`
pub fn number_field<T: FromStr>(object: &Value, key: &str) -> Result<T> {
    let raw = str_field(object, key)?;
    raw.trim().parse().map_err(|_| StockError::InvalidNumber {
        field: key.to_string(),
        value: raw.to_string(),
    })
}

/// `YYYY-MM-DD` date
pub fn date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| StockError::InvalidDate(raw.to_string()))
}
