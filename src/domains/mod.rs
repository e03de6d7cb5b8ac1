//! Domains module containing business logic organized by bounded contexts.
//!
//! - **search**: the adapter for the external search provider
//! - **tools**: the tool registry, validation and dispatch engine

pub mod search;
pub mod tools;
