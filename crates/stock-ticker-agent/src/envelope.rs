//! The success/error envelope returned by every tool

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Result envelope handed back to the agent runtime
///
/// Serializes as `{"status": "success", "data": ...}` or
/// `{"status": "error", "error_message": ...}`, so a payload and a message can
/// never be present together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult<T> {
    Success {
        data: T,
    },
    Error {
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl<T> ToolResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Fold an operation outcome into an envelope
    ///
    /// Not-found errors keep their message as is; every other failure is
    /// prefixed with `context`, e.g. `"Error fetching price: ..."`.
    pub fn from_result(result: Result<T>, context: &str) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) if err.is_not_found() => {
                tracing::info!(error = %err, "{context}: nothing found");
                Self::error(err.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "{context}");
                Self::error(format!("{context}: {err}"))
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}

impl<T: Serialize> ToolResult<T> {
    /// JSON form sent back through the tool interface
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({
                "status": "error",
                "error_message": format!("Failed to serialize tool result: {e}"),
            })
        })
    }
}
