//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry is built once at startup and is read-only afterwards:
//! - names are unique (registration of a duplicate fails)
//! - lookup by name goes through a hash index
//! - enumeration preserves registration order

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::{LocalDescriptionsTool, LocalPoisTool, RichFetchTool, WebSearchTool};
use super::handlers::{ProviderRelay, ToolHandler};
use super::validator::InputShape;
use super::RegistryError;
use crate::domains::search::SearchApi;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// A registered tool: identity, declared input shape and handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    shape: InputShape,
    handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        shape: InputShape,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            shape,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn shape(&self) -> &InputShape {
        &self.shape
    }

    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }

    /// Wire-visible metadata for this tool. The handler is not exposed.
    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            self.shape.schema().clone(),
        )
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Immutable, ordered collection of tool descriptors.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Start building a registry.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Registry holding the built-in catalog, in catalog order, with every
    /// tool served through `api`.
    pub fn with_builtin_tools(api: Arc<dyn SearchApi>) -> Result<Self, RegistryError> {
        let relay: Arc<dyn ToolHandler> = Arc::new(ProviderRelay::new(api));

        Ok(Self::builder()
            .register(WebSearchTool::descriptor(relay.clone()))?
            .register(LocalPoisTool::descriptor(relay.clone()))?
            .register(LocalDescriptionsTool::descriptor(relay.clone()))?
            .register(RichFetchTool::descriptor(relay))?
            .build())
    }

    /// Find a tool by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// All tools in registration order.
    pub fn list(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// All tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// Wire-visible metadata of all tools, in registration order.
    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builder enforcing name uniqueness.
#[derive(Debug, Default)]
pub struct ToolRegistryBuilder {
    registry: ToolRegistry,
}

impl ToolRegistryBuilder {
    /// Add a descriptor. Fails if a tool with the same name is registered.
    pub fn register(mut self, descriptor: ToolDescriptor) -> Result<Self, RegistryError> {
        let registry = &mut self.registry;
        if registry.index.contains_key(descriptor.name()) {
            return Err(RegistryError::DuplicateTool(descriptor.name().to_string()));
        }
        registry
            .index
            .insert(descriptor.name().to_string(), registry.tools.len());
        registry.tools.push(descriptor);
        Ok(self)
    }

    /// Freeze the registry.
    pub fn build(self) -> ToolRegistry {
        self.registry
    }
}
