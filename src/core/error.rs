//! Error types and handling for the MCP server.
//!
//! This module defines the crate-wide error type used for startup and
//! infrastructure failures. Per-invocation tool failures use
//! [`InvocationError`](crate::domains::tools::InvocationError) instead and
//! never reach this type.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry could not be built.
    #[error("Registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// The search provider client could not be built.
    #[error("Search client error: {0}")]
    Search(#[from] crate::domains::search::SearchClientError),

    /// The transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
