//! Tool definitions module.
//!
//! This module exports the built-in tool catalog. Each tool is defined in its
//! own file with its parameters, validation and provider query mapping.

pub mod local;
pub mod rich_fetch;
pub mod web_search;

pub use local::{LocalDescriptionsTool, LocalPoisTool, LocationIdsParams};
pub use rich_fetch::{RichFetchParams, RichFetchTool};
pub use web_search::{Freshness, SafeSearch, WebSearchParams, WebSearchTool};

use crate::domains::search::QueryParams;

/// Validated input of a single invocation, tagged by tool.
///
/// Values are produced only by the validator; handlers never see raw
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInput {
    WebSearch(WebSearchParams),
    LocalPois(LocationIdsParams),
    LocalDescriptions(LocationIdsParams),
    RichFetch(RichFetchParams),
}

impl ToolInput {
    /// Provider endpoint this input is sent to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::WebSearch(_) => WebSearchTool::ENDPOINT,
            Self::LocalPois(_) => LocalPoisTool::ENDPOINT,
            Self::LocalDescriptions(_) => LocalDescriptionsTool::ENDPOINT,
            Self::RichFetch(_) => RichFetchTool::ENDPOINT,
        }
    }

    /// Provider query parameters for this input.
    pub fn query_params(&self) -> QueryParams {
        match self {
            Self::WebSearch(params) => params.query_params(),
            Self::LocalPois(params) | Self::LocalDescriptions(params) => params.query_params(),
            Self::RichFetch(params) => params.query_params(),
        }
    }
}
