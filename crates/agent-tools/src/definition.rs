//! Tool definition types handed to the agent runtime

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition for an LLM provider
///
/// Describes a tool the model can call: its name, a description, and the
/// input schema in JSON Schema format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (matches the name in the ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helpers to build JSON schemas for tool inputs
pub mod schema {
    use serde_json::{Value, json};

    /// Object schema with the given properties and required keys
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// String property restricted to a fixed set of values
    pub fn string_enum(description: &str, values: &[&str], default: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
            "enum": values,
            "default": default,
        })
    }

    /// Free-form object property schema
    pub fn any_object(description: &str) -> Value {
        json!({
            "type": "object",
            "description": description,
        })
    }
}
