//! Tool registry for managing available tools

use crate::{Tool, ToolDefinition};
use agent_core::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Registry for managing tools
///
/// Tools are kept ordered by name so listings are stable.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<BTreeMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        if tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "Replaced previously registered tool");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.get(name).cloned()
    }

    /// List all registered tools
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.values().cloned().collect()
    }

    /// Names of all registered tools, sorted
    pub fn names(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.keys().cloned().collect()
    }

    /// Definitions to send to the LLM provider
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.list_tools().iter().map(|tool| tool.definition()).collect()
    }

    /// Dispatch a call to the named tool
    ///
    /// Arguments must be a JSON object; anything else is rejected before the
    /// tool runs.
    pub async fn execute(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;

        if !params.is_object() {
            return Err(Error::invalid_parameters(format!(
                "arguments for {name} must be a JSON object"
            )));
        }

        tracing::debug!(tool = name, "Executing tool");
        tool.execute(params).await
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        async fn execute(&self, params: Value) -> Result<Value> {
            Ok(json!({ "echo": params }))
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the arguments back"
        }

        fn input_schema(&self) -> Value {
            schema::object(json!({}), vec![])
        }
    }

    #[test]
    fn test_register_and_list() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(EchoTool));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["echo".to_string()]);
        assert!(registry.get("echo").is_some());

        let definitions = registry.definitions();
        assert_eq!(definitions[0].name, "echo");
        assert_eq!(definitions[0].input_schema["type"], "object");
    }

    #[test]
    fn test_execute_dispatches_by_name() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let result = tokio_test::block_on(registry.execute("echo", json!({"a": 1})));
        assert_eq!(result.ok(), Some(json!({"echo": {"a": 1}})));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();

        let err = registry.execute("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(name) if name == "missing"));
    }

    #[tokio::test]
    async fn test_execute_rejects_non_object_arguments() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let err = registry.execute("echo", json!(["AAPL"])).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameters: arguments for echo must be a JSON object"
        );
    }
}
