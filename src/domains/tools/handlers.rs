//! Tool handlers module.
//!
//! A handler receives a validated [`ToolInput`] and produces a [`ToolResult`].
//! The built-in search tools all use [`ProviderRelay`], which forwards the
//! input to the search provider and returns the decoded body untouched.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::debug;

use super::InvocationError;
use super::definitions::ToolInput;
use crate::domains::search::SearchApi;

/// Successful output of a tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    /// Structured JSON payload.
    Json(Value),

    /// Plain-text message.
    Text(String),
}

impl ToolResult {
    /// Wrap into the MCP success envelope.
    ///
    /// JSON payloads are returned as structured content (with the serialized
    /// JSON mirrored as text for clients that ignore structured content).
    pub fn into_call_result(self) -> CallToolResult {
        match self {
            Self::Json(value) => CallToolResult::structured(value),
            Self::Text(text) => CallToolResult::success(vec![Content::text(text)]),
        }
    }
}

/// Trait implemented by everything that can serve a registered tool.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated input.
    async fn handle(&self, input: ToolInput) -> Result<ToolResult, InvocationError>;
}

/// Handler that relays a tool input to the search provider.
///
/// Builds the provider query from the input, performs one call through the
/// injected [`SearchApi`] and wraps the JSON body as-is.
#[derive(Clone)]
pub struct ProviderRelay {
    api: Arc<dyn SearchApi>,
}

impl ProviderRelay {
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ToolHandler for ProviderRelay {
    async fn handle(&self, input: ToolInput) -> Result<ToolResult, InvocationError> {
        let endpoint = input.endpoint();
        let params = input.query_params();
        debug!(endpoint, params = params.len(), "Relaying tool input to provider");

        let json = self.api.fetch_json(endpoint, &params).await?;
        Ok(ToolResult::Json(json))
    }
}
