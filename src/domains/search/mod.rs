//! Search provider domain module.
//!
//! This module contains the adapter that talks to the Brave Search HTTP API.
//! Tool handlers depend only on the [`SearchApi`] trait; the concrete
//! [`BraveSearchClient`] is built once at startup from the immutable
//! [`SearchConfig`](crate::core::config::SearchConfig).
//!
//! - `client.rs` - `SearchApi` trait and the reqwest-backed client
//! - `query.rs` - ordered query parameters with presence-based filtering
//! - `error.rs` - adapter error types

mod client;
mod error;
mod query;

pub use client::{BraveSearchClient, SUBSCRIPTION_TOKEN_HEADER, SearchApi};
pub(crate) use error::describe_status;
pub use error::{SearchClientError, SearchError};
pub use query::QueryParams;
