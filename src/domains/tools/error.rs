//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use serde_json::json;
use thiserror::Error;

use crate::domains::search::{SearchError, describe_status};

/// Errors that can occur during a single tool invocation.
///
/// Every variant is local to the invocation that produced it and is reported
/// to the caller as-is. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// The arguments do not conform to the tool's input shape.
    #[error("Invalid argument '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// The provider credential is not configured.
    #[error("{key} is not set")]
    MissingCredential { key: String },

    /// The provider returned a non-success status or could not be reached.
    #[error("Brave API {}: {body}", describe_status(.status))]
    UpstreamFailure { status: Option<u16>, body: String },
}

impl InvocationError {
    /// Create an "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// Create a validation error for `field`.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool { .. } => "unknown_tool",
            Self::ValidationFailed { .. } => "validation_failed",
            Self::MissingCredential { .. } => "missing_credential",
            Self::UpstreamFailure { .. } => "upstream_failure",
        }
    }

    /// Convert into the protocol error returned to the client.
    ///
    /// Unknown tools map to "method not found", validation failures to
    /// "invalid params" and provider failures to "internal error". The
    /// `data` payload always carries `kind` plus the variant's fields.
    pub fn to_mcp_error(&self) -> McpError {
        let message = self.to_string();
        match self {
            Self::UnknownTool { name } => McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                message,
                Some(json!({ "kind": self.kind(), "name": name })),
            ),
            Self::ValidationFailed { field, reason } => McpError::invalid_params(
                message,
                Some(json!({ "kind": self.kind(), "field": field, "reason": reason })),
            ),
            Self::MissingCredential { key } => McpError::internal_error(
                message,
                Some(json!({ "kind": self.kind(), "key": key })),
            ),
            Self::UpstreamFailure { status, body } => McpError::internal_error(
                message,
                Some(json!({ "kind": self.kind(), "status": status, "body": body })),
            ),
        }
    }
}

impl From<SearchError> for InvocationError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::MissingCredential { key } => Self::MissingCredential {
                key: key.to_string(),
            },
            SearchError::Upstream { status, body } => Self::UpstreamFailure { status, body },
        }
    }
}

impl From<InvocationError> for McpError {
    fn from(err: InvocationError) -> Self {
        err.to_mcp_error()
    }
}

/// Errors raised while building the tool registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two descriptors share a name.
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_maps_to_method_not_found() {
        let err = InvocationError::unknown_tool("nope").to_mcp_error();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: nope");
    }

    #[test]
    fn test_validation_maps_to_invalid_params_with_field() {
        let err = InvocationError::validation("count", "must be at most 20").to_mcp_error();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        let data = err.data.unwrap();
        assert_eq!(data["kind"], "validation_failed");
        assert_eq!(data["field"], "count");
    }

    #[test]
    fn test_upstream_keeps_status_and_body() {
        let err: InvocationError = SearchError::status(503, "down").into();
        assert_eq!(
            err,
            InvocationError::UpstreamFailure {
                status: Some(503),
                body: "down".to_string()
            }
        );
        assert_eq!(err.to_string(), "Brave API 503: down");

        let mcp = err.to_mcp_error();
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(mcp.data.unwrap()["status"], 503);
    }

    #[test]
    fn test_missing_credential_conversion() {
        let err: InvocationError = SearchError::MissingCredential {
            key: "SEARCH_MCP_API_KEY",
        }
        .into();
        assert_eq!(err.kind(), "missing_credential");
        assert_eq!(err.to_string(), "SEARCH_MCP_API_KEY is not set");
    }
}
