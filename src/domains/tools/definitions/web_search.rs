//! Brave web search tool.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolInput;
use crate::domains::search::QueryParams;
use crate::domains::tools::validator::{Arguments, InputShape, bounded, non_empty};
use crate::domains::tools::{InvocationError, ToolDescriptor, ToolHandler};

/// Maximum number of results per request accepted by the provider.
pub const MAX_COUNT: u32 = 20;

/// Safe-search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

impl SafeSearch {
    fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }
}

/// Result freshness window: past day, week, month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Pd,
    Pw,
    Pm,
    Py,
}

impl Freshness {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pd => "pd",
            Self::Pw => "pw",
            Self::Pm => "pm",
            Self::Py => "py",
        }
    }
}

/// Parameters for the web search tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchParams {
    /// Search query
    #[schemars(length(min = 1))]
    pub query: String,

    /// Results count (1-20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 20))]
    pub count: Option<u32>,

    /// Results offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_search: Option<SafeSearch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<Freshness>,

    /// Include rich callback hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_rich_callback: Option<bool>,
}

impl WebSearchParams {
    /// Parameters for a plain query with every option left out.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: None,
            offset: None,
            safe_search: None,
            country: None,
            freshness: None,
            enable_rich_callback: None,
        }
    }

    /// Provider query string parameters.
    ///
    /// Only supplied fields are sent. `enable_rich_callback=1` is sent only
    /// when the flag is `true`.
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("q", self.query.as_str())
            .push_opt("count", self.count)
            .push_opt("offset", self.offset)
            .push_opt("safesearch", self.safe_search.map(SafeSearch::as_str))
            .push_opt("country", self.country.as_deref())
            .push_opt("freshness", self.freshness.map(Freshness::as_str));
        if self.enable_rich_callback == Some(true) {
            params.push("enable_rich_callback", "1");
        }
        params
    }
}

/// Web search tool definition.
#[derive(Debug, Clone, Copy)]
pub struct WebSearchTool;

impl WebSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "web_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the web using Brave Web Search API";

    /// Provider endpoint, relative to the API base URL.
    pub const ENDPOINT: &'static str = "web/search";

    /// Validate raw arguments into [`WebSearchParams`].
    pub fn parse(args: &Arguments) -> Result<WebSearchParams, InvocationError> {
        let count = args
            .optional("count")?
            .map(|count| bounded("count", count, 1, Some(MAX_COUNT)))
            .transpose()?;

        Ok(WebSearchParams {
            query: non_empty("query", args.required("query")?)?,
            count,
            offset: args.optional("offset")?,
            safe_search: args.optional("safeSearch")?,
            country: args.optional("country")?,
            freshness: args.optional("freshness")?,
            enable_rich_callback: args.optional("enableRichCallback")?,
        })
    }

    /// Declared input shape.
    pub fn shape() -> InputShape {
        InputShape::for_params::<WebSearchParams>(|args| Self::parse(args).map(ToolInput::WebSearch))
    }

    /// Registry descriptor served by `handler`.
    pub fn descriptor(handler: Arc<dyn ToolHandler>) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::shape(), handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::JsonObject;
    use serde_json::{Value, json};

    fn args(value: Value) -> Arguments {
        serde_json::from_value::<JsonObject>(value).unwrap().into()
    }

    #[test]
    fn test_parse_minimal() {
        let params = WebSearchTool::parse(&args(json!({ "query": "cats" }))).unwrap();
        assert_eq!(params, WebSearchParams::new("cats"));
    }

    #[test]
    fn test_parse_all_fields() {
        let params = WebSearchTool::parse(&args(json!({
            "query": "rust",
            "count": 5,
            "offset": 2,
            "safeSearch": "strict",
            "country": "DE",
            "freshness": "pw",
            "enableRichCallback": true
        })))
        .unwrap();
        assert_eq!(params.count, Some(5));
        assert_eq!(params.offset, Some(2));
        assert_eq!(params.safe_search, Some(SafeSearch::Strict));
        assert_eq!(params.country.as_deref(), Some("DE"));
        assert_eq!(params.freshness, Some(Freshness::Pw));
        assert_eq!(params.enable_rich_callback, Some(true));
    }

    #[test]
    fn test_parse_rejects_empty_query() {
        let err = WebSearchTool::parse(&args(json!({ "query": "" }))).unwrap_err();
        assert_eq!(err, InvocationError::validation("query", "must not be empty"));
    }

    #[test]
    fn test_parse_rejects_count_out_of_range() {
        for count in [0, 21] {
            let err =
                WebSearchTool::parse(&args(json!({ "query": "cats", "count": count }))).unwrap_err();
            assert!(
                matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "count")
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_enum_value() {
        let err = WebSearchTool::parse(&args(json!({ "query": "cats", "safeSearch": "max" })))
            .unwrap_err();
        assert!(
            matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "safeSearch")
        );

        let err = WebSearchTool::parse(&args(json!({ "query": "cats", "freshness": "py2" })))
            .unwrap_err();
        assert!(
            matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "freshness")
        );
    }

    #[test]
    fn test_parse_rejects_string_boolean() {
        let err = WebSearchTool::parse(&args(json!({ "query": "cats", "enableRichCallback": "yes" })))
            .unwrap_err();
        assert!(matches!(err, InvocationError::ValidationFailed { .. }));
    }

    #[test]
    fn test_parse_accepts_offset_beyond_u32() {
        let params =
            WebSearchTool::parse(&args(json!({ "query": "cats", "offset": 5_000_000_000u64 })))
                .unwrap();
        assert_eq!(params.offset, Some(5_000_000_000));
        assert_eq!(params.query_params().get("offset"), Some("5000000000"));
    }

    #[test]
    fn test_parse_rejects_negative_offset() {
        let err = WebSearchTool::parse(&args(json!({ "query": "cats", "offset": -1 }))).unwrap_err();
        assert!(
            matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "offset")
        );
    }

    #[test]
    fn test_query_params_minimal() {
        let params = WebSearchParams::new("cats").query_params();
        assert_eq!(params.to_query_string().unwrap(), "q=cats");
    }

    #[test]
    fn test_query_params_keep_zero_offset() {
        let mut input = WebSearchParams::new("cats");
        input.offset = Some(0);
        let params = input.query_params();
        assert_eq!(params.get("offset"), Some("0"));
    }

    #[test]
    fn test_query_params_full() {
        let input = WebSearchParams {
            query: "rust lang".into(),
            count: Some(10),
            offset: Some(1),
            safe_search: Some(SafeSearch::Off),
            country: Some("US".into()),
            freshness: Some(Freshness::Pd),
            enable_rich_callback: Some(true),
        };
        assert_eq!(
            input.query_params().to_query_string().unwrap(),
            "q=rust+lang&count=10&offset=1&safesearch=off&country=US&freshness=pd&enable_rich_callback=1"
        );
    }

    #[test]
    fn test_rich_callback_false_is_omitted() {
        let mut input = WebSearchParams::new("cats");
        input.enable_rich_callback = Some(false);
        assert!(!input.query_params().contains("enable_rich_callback"));
    }

    #[test]
    fn test_empty_country_is_omitted() {
        let mut input = WebSearchParams::new("cats");
        input.country = Some(String::new());
        assert!(!input.query_params().contains("country"));
    }

    #[test]
    fn test_shape_requires_query() {
        let shape = WebSearchTool::shape();
        assert_eq!(shape.schema()["required"], json!(["query"]));
    }
}
