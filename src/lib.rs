//! Search MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing Brave
//! Search API tools: `web_search`, `local_pois`, `local_descriptions` and
//! `rich_fetch`. Each tool validates its arguments and relays the provider's
//! JSON response unchanged.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: registry, validator and dispatch engine
//!   - **search**: the provider adapter
//!
//! # Example
//!
//! ```rust,no_run
//! use search_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
