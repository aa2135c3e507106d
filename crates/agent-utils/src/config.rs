//! Environment-variable helpers for configuration loading

use std::str::FromStr;

/// Read a variable, treating unset and blank values the same
pub fn env_var(name: &str) -> Option<String> {
    non_blank(std::env::var(name).ok())
}

/// Read and parse a variable
///
/// Returns `Ok(None)` when the variable is unset or blank, and an error
/// message naming the variable when it is set but does not parse.
pub fn env_parse<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| format!("{name}={raw:?} is invalid: {e}"))
        })
        .transpose()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
