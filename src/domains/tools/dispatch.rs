//! Dispatch engine - resolves list/call requests against the registry.
//!
//! Invocation pipeline: lookup → validate → handle. The first failing step
//! ends the invocation and its error is reported; there are no retries and
//! no partially successful results.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{info, warn};

use super::handlers::ToolResult;
use super::registry::ToolRegistry;
use super::validator::validate;
use super::InvocationError;

/// Routes tool requests to registered handlers.
///
/// Holds only the read-only registry, so clones can serve concurrent
/// invocations without coordination.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Enumerate all tools in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.to_tools()
    }

    /// Run one invocation and return the handler's result.
    ///
    /// Missing arguments are treated as an empty object.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<ToolResult, InvocationError> {
        let tool = self
            .registry
            .lookup(name)
            .ok_or_else(|| InvocationError::unknown_tool(name))?;

        let raw = Value::Object(arguments.unwrap_or_default());
        let input = validate(tool.shape(), raw)?;

        tool.handler().handle(input).await
    }

    /// Run one invocation and wrap the outcome in the MCP envelope.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", name);
        match self.call_tool(name, arguments).await {
            Ok(result) => Ok(result.into_call_result()),
            Err(err) => {
                warn!(kind = err.kind(), "Tool '{}' failed: {}", name, err);
                Err(err.to_mcp_error())
            }
        }
    }
}
