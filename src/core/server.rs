//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool requests to the [`Dispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` and registered once in
//! `ToolRegistry::with_builtin_tools`. The server only translates protocol
//! requests into dispatcher calls, so adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::search::{BraveSearchClient, SearchApi};
use crate::domains::tools::{Dispatcher, ToolRegistry};

/// Instructions reported to clients during initialization.
pub const INSTRUCTIONS: &str = "Brave Search tools: use web_search first; pass location ids \
     from its results to local_pois or local_descriptions, and its rich callback_key to rich_fetch.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: the configuration and the tool registry are shared and read-only.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server backed by the Brave Search API.
    pub fn new(config: Config) -> Result<Self> {
        let api = Arc::new(BraveSearchClient::new(&config.search)?);
        Self::with_search_api(config, api)
    }

    /// Create a server whose tools call `api` instead of the real provider.
    pub fn with_search_api(config: Config, api: Arc<dyn SearchApi>) -> Result<Self> {
        let registry = ToolRegistry::with_builtin_tools(api)?;
        info!("Registered {} tools", registry.len());

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(Arc::new(registry)),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool dispatcher (shared with the HTTP transport).
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.name().to_string();
        server_info.version = self.version().to_string();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatcher
            .invoke(&request.name, request.arguments)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_uses_configured_identity() {
        let mut config = Config::default();
        config.server.name = "custom-search".to_string();
        let server = McpServer::new(config).unwrap();

        let info = server.get_info();
        assert_eq!(info.server_info.name, "custom-search");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    #[test]
    fn test_default_name() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "url-context-mcp");
        assert_eq!(server.dispatcher().list_tools().len(), 4);
    }
}
