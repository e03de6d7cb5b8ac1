//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are named, schema-validated operations that MCP clients can list
//! and call; the built-in tools forward to the search provider.
//!
//! ## Architecture
//!
//! - `definitions/` - Built-in tool definitions (one file per tool family)
//! - `validator.rs` - Input shapes and argument validation
//! - `handlers.rs` - Handler trait, results and the provider relay
//! - `registry.rs` - Immutable, ordered tool registry
//! - `dispatch.rs` - Lookup → validate → handle pipeline
//! - `error.rs` - Invocation and registry error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `parse()` and `shape()`
//! 2. Add a `ToolInput` variant and its endpoint/query mapping
//! 3. Register the descriptor in `ToolRegistry::with_builtin_tools`

pub mod definitions;
mod dispatch;
mod error;
mod handlers;
mod registry;
pub mod validator;

pub use definitions::ToolInput;
pub use dispatch::Dispatcher;
pub use error::{InvocationError, RegistryError};
pub use handlers::{ProviderRelay, ToolHandler, ToolResult};
pub use registry::{ToolDescriptor, ToolRegistry, ToolRegistryBuilder};
pub use validator::{Arguments, InputShape};
