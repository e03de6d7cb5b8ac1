//! Brave local search tools: points of interest and location descriptions.
//!
//! Both tools take the location ids returned by a web search and forward
//! them to the provider as repeated `ids` query parameters.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolInput;
use crate::domains::search::QueryParams;
use crate::domains::tools::validator::{Arguments, InputShape, bounded_len};
use crate::domains::tools::{InvocationError, ToolDescriptor, ToolHandler};

/// Maximum number of location ids per request.
pub const MAX_IDS: usize = 20;

/// Parameters shared by the local search tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocationIdsParams {
    /// Location ids from a web search result (1-20)
    #[schemars(length(min = 1, max = 20))]
    pub ids: Vec<String>,
}

impl LocationIdsParams {
    /// Validate raw arguments: `ids` must be an array of 1 to 20 strings.
    pub fn parse(args: &Arguments) -> Result<Self, InvocationError> {
        let ids = bounded_len("ids", args.required::<Vec<String>>("ids")?, 1, MAX_IDS)?;
        Ok(Self { ids })
    }

    /// One `ids=<id>` pair per id, in the order given.
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_all("ids", self.ids.iter().map(String::as_str));
        params
    }
}

/// Local points-of-interest tool definition.
#[derive(Debug, Clone, Copy)]
pub struct LocalPoisTool;

impl LocalPoisTool {
    pub const NAME: &'static str = "local_pois";

    pub const DESCRIPTION: &'static str =
        "Fetch extra information for locations using Brave Local Search API";

    pub const ENDPOINT: &'static str = "local/pois";

    pub fn shape() -> InputShape {
        InputShape::for_params::<LocationIdsParams>(|args| {
            LocationIdsParams::parse(args).map(ToolInput::LocalPois)
        })
    }

    pub fn descriptor(handler: Arc<dyn ToolHandler>) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::shape(), handler)
    }
}

/// Local descriptions tool definition.
#[derive(Debug, Clone, Copy)]
pub struct LocalDescriptionsTool;

impl LocalDescriptionsTool {
    pub const NAME: &'static str = "local_descriptions";

    pub const DESCRIPTION: &'static str =
        "Fetch AI-generated descriptions for locations using Brave Local Search API";

    pub const ENDPOINT: &'static str = "local/descriptions";

    pub fn shape() -> InputShape {
        InputShape::for_params::<LocationIdsParams>(|args| {
            LocationIdsParams::parse(args).map(ToolInput::LocalDescriptions)
        })
    }

    pub fn descriptor(handler: Arc<dyn ToolHandler>) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::shape(), handler)
    }
}
