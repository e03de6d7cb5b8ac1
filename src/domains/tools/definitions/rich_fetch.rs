//! Brave rich results tool.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolInput;
use crate::domains::search::QueryParams;
use crate::domains::tools::validator::{Arguments, InputShape, non_empty};
use crate::domains::tools::{InvocationError, ToolDescriptor, ToolHandler};

/// Parameters for the rich results tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RichFetchParams {
    /// callback_key from web_search.rich.hint.callback_key
    #[schemars(length(min = 1))]
    pub callback_key: String,
}

impl RichFetchParams {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("callback_key", self.callback_key.as_str());
        params
    }
}

/// Rich results tool definition.
///
/// Fetches the rich result announced by a `web_search` response that was
/// requested with `enableRichCallback`.
#[derive(Debug, Clone, Copy)]
pub struct RichFetchTool;

impl RichFetchTool {
    pub const NAME: &'static str = "rich_fetch";

    pub const DESCRIPTION: &'static str =
        "Fetch rich results using the callback_key from web_search";

    pub const ENDPOINT: &'static str = "web/rich";

    pub fn parse(args: &Arguments) -> Result<RichFetchParams, InvocationError> {
        Ok(RichFetchParams {
            callback_key: non_empty("callback_key", args.required("callback_key")?)?,
        })
    }

    pub fn shape() -> InputShape {
        InputShape::for_params::<RichFetchParams>(|args| Self::parse(args).map(ToolInput::RichFetch))
    }

    pub fn descriptor(handler: Arc<dyn ToolHandler>) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::shape(), handler)
    }
}
