//! Tool framework for exposing functions to an agent runtime
//!
//! A [`Tool`] is a named async function with a JSON-schema description of its
//! arguments. Tools are collected in a [`ToolRegistry`], which the agent
//! runtime (or the CLI harness) uses to list definitions and dispatch calls.

pub mod definition;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use registry::ToolRegistry;
pub use tool::Tool;
