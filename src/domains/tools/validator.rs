//! Input validation for tool arguments.
//!
//! Validation is pure: raw JSON arguments go in, a typed [`ToolInput`] or a
//! field-level [`InvocationError::ValidationFailed`] comes out. Values that do
//! not conform are rejected, never clamped or truncated.
//!
//! Each tool declares an [`InputShape`]: the JSON schema advertised to
//! clients plus the parser that turns [`Arguments`] into its `ToolInput`
//! variant. The parser uses the [`Arguments`] accessors for presence and type
//! checks and the constraint helpers in this module for bounds.

use std::fmt::Display;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::InvocationError;
use super::definitions::ToolInput;

/// Parser producing a tool's typed input from validated-object arguments.
pub type ParseFn = fn(&Arguments) -> Result<ToolInput, InvocationError>;

/// Declared input shape of a tool.
#[derive(Clone)]
pub struct InputShape {
    schema: Arc<JsonObject>,
    parse: ParseFn,
}

impl std::fmt::Debug for InputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputShape")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl InputShape {
    /// Create a shape from an explicit schema and parser.
    pub fn new(schema: Arc<JsonObject>, parse: ParseFn) -> Self {
        Self { schema, parse }
    }

    /// Create a shape whose schema is generated from `P`.
    ///
    /// Optional fields come out of the generator as nullable; those null
    /// variants are removed because [`validate`] rejects explicit `null`.
    pub fn for_params<P: schemars::JsonSchema + 'static>(parse: ParseFn) -> Self {
        let mut schema = (*rmcp::handler::server::tool::cached_schema_for_type::<P>()).clone();
        strip_null_variants(&mut schema);
        Self::new(Arc::new(schema), parse)
    }

    /// JSON schema advertised to clients as `inputSchema`.
    pub fn schema(&self) -> &Arc<JsonObject> {
        &self.schema
    }
}

/// Remove every way `schema` admits `null`: `nullable` flags, `"null"` in
/// `type` arrays and null-only `anyOf`/`oneOf` branches. A union left with a
/// single branch is inlined.
pub fn strip_null_variants(schema: &mut JsonObject) {
    schema.remove("nullable");

    let single_type = match schema.get_mut("type") {
        Some(Value::Array(types)) => {
            types.retain(|t| t.as_str() != Some("null"));
            (types.len() == 1).then(|| types[0].clone())
        }
        _ => None,
    };
    if let Some(only) = single_type {
        schema.insert("type".to_string(), only);
    }

    for key in ["anyOf", "oneOf"] {
        let single_branch = match schema.get_mut(key) {
            Some(Value::Array(branches)) => {
                branches.retain(|branch| !is_null_schema(branch));
                if branches.len() == 1 { branches.pop() } else { None }
            }
            _ => None,
        };
        if let Some(branch) = single_branch {
            schema.remove(key);
            if let Value::Object(only) = branch {
                for (k, v) in only {
                    schema.entry(k).or_insert(v);
                }
            }
        }
    }

    for value in schema.values_mut() {
        strip_nested(value);
    }
}

fn strip_nested(value: &mut Value) {
    match value {
        Value::Object(map) => strip_null_variants(map),
        Value::Array(items) => items.iter_mut().for_each(strip_nested),
        _ => {}
    }
}

fn is_null_schema(schema: &Value) -> bool {
    let Value::Object(map) = schema else {
        return false;
    };
    map.get("const").is_some_and(Value::is_null)
        || map.get("type").and_then(Value::as_str) == Some("null")
        || map
            .get("enum")
            .and_then(Value::as_array)
            .is_some_and(|values| values.iter().all(Value::is_null))
}

/// Validate `raw` against `shape`.
///
/// `raw` must be a JSON object. Explicit `null` values are rejected for every
/// field: an optional field is either absent or well-typed. Keys the shape
/// does not know about are ignored.
pub fn validate(shape: &InputShape, raw: Value) -> Result<ToolInput, InvocationError> {
    let Value::Object(map) = raw else {
        return Err(InvocationError::validation(
            "arguments",
            format!("expected an object, got {}", type_name(&raw)),
        ));
    };

    if let Some((field, _)) = map.iter().find(|(_, value)| value.is_null()) {
        return Err(InvocationError::validation(field.as_str(), "must not be null"));
    }

    (shape.parse)(&Arguments { map })
}

/// Object-shaped arguments with typed field accessors.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    map: JsonObject,
}

impl Arguments {
    /// Read a required field, failing when absent or of the wrong type.
    pub fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, InvocationError> {
        self.optional(field)?
            .ok_or_else(|| InvocationError::validation(field, "is required"))
    }

    /// Read an optional field. Absence yields `None`; presence must be
    /// well-typed.
    pub fn optional<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, InvocationError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(Value::Null) => Err(InvocationError::validation(field, "must not be null")),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| InvocationError::validation(field, e.to_string())),
        }
    }
}

impl From<JsonObject> for Arguments {
    fn from(map: JsonObject) -> Self {
        Self { map }
    }
}

/// Require a non-empty string.
pub fn non_empty(field: &str, value: String) -> Result<String, InvocationError> {
    if value.is_empty() {
        return Err(InvocationError::validation(field, "must not be empty"));
    }
    Ok(value)
}

/// Require `min <= value` and, when given, `value <= max` (both inclusive).
pub fn bounded<T>(field: &str, value: T, min: T, max: Option<T>) -> Result<T, InvocationError>
where
    T: PartialOrd + Display,
{
    if value < min {
        return Err(InvocationError::validation(
            field,
            format!("must be at least {min}, got {value}"),
        ));
    }
    if let Some(max) = max {
        if value > max {
            return Err(InvocationError::validation(
                field,
                format!("must be at most {max}, got {value}"),
            ));
        }
    }
    Ok(value)
}

/// Require a list length within `min..=max`.
pub fn bounded_len<T>(
    field: &str,
    values: Vec<T>,
    min: usize,
    max: usize,
) -> Result<Vec<T>, InvocationError> {
    let len = values.len();
    if len < min {
        return Err(InvocationError::validation(
            field,
            format!("must contain at least {min} item(s), got {len}"),
        ));
    }
    if len > max {
        return Err(InvocationError::validation(
            field,
            format!("must contain at most {max} items, got {len}"),
        ));
    }
    Ok(values)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => map.into(),
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_required_missing() {
        let err = args(json!({})).required::<String>("query").unwrap_err();
        assert_eq!(err, InvocationError::validation("query", "is required"));
    }

    #[test]
    fn test_required_wrong_type() {
        let err = args(json!({ "query": 5 }))
            .required::<String>("query")
            .unwrap_err();
        assert!(matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "query"));
    }

    #[test]
    fn test_optional_absent_and_present() {
        let a = args(json!({ "offset": 0 }));
        assert_eq!(a.optional::<u32>("offset").unwrap(), Some(0));
        assert_eq!(a.optional::<u32>("count").unwrap(), None);
    }

    #[test]
    fn test_optional_rejects_negative_unsigned() {
        let err = args(json!({ "offset": -1 }))
            .optional::<u32>("offset")
            .unwrap_err();
        assert!(matches!(err, InvocationError::ValidationFailed { ref field, .. } if field == "offset"));
    }

    #[test]
    fn test_bounded_inclusive() {
        assert_eq!(bounded("count", 1, 1, Some(20)).unwrap(), 1);
        assert_eq!(bounded("count", 20, 1, Some(20)).unwrap(), 20);
        assert!(bounded("count", 0, 1, Some(20)).is_err());
        assert!(bounded("count", 21, 1, Some(20)).is_err());
        assert_eq!(bounded("offset", 9000, 0, None).unwrap(), 9000);
    }

    #[test]
    fn test_bounded_len() {
        assert!(bounded_len::<String>("ids", vec![], 1, 20).is_err());
        assert!(bounded_len("ids", vec!["x"; 21], 1, 20).is_err());
        assert_eq!(bounded_len("ids", vec!["x"; 20], 1, 20).unwrap().len(), 20);
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("query", String::new()).is_err());
        assert_eq!(non_empty("query", "cats".into()).unwrap(), "cats");
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let shape = InputShape::new(Arc::new(JsonObject::new()), |_| unreachable!());
        let err = validate(&shape, json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            InvocationError::validation("arguments", "expected an object, got array")
        );
    }

    #[test]
    fn test_strip_null_variants() {
        let Value::Object(mut schema) = json!({
            "type": "object",
            "properties": {
                "country": { "type": "string", "nullable": true },
                "count": { "type": ["integer", "null"], "minimum": 1 },
                "safeSearch": {
                    "description": "Safe-search level",
                    "anyOf": [
                        { "$ref": "#/$defs/SafeSearch" },
                        { "const": null, "nullable": true }
                    ]
                },
                "mode": { "oneOf": [{ "type": "string" }, { "type": "integer" }] }
            }
        }) else {
            unreachable!()
        };

        strip_null_variants(&mut schema);

        assert_eq!(
            Value::Object(schema),
            json!({
                "type": "object",
                "properties": {
                    "country": { "type": "string" },
                    "count": { "type": "integer", "minimum": 1 },
                    "safeSearch": {
                        "description": "Safe-search level",
                        "$ref": "#/$defs/SafeSearch"
                    },
                    "mode": { "oneOf": [{ "type": "string" }, { "type": "integer" }] }
                }
            })
        );
    }

    #[test]
    fn test_validate_rejects_null_field() {
        let shape = InputShape::new(Arc::new(JsonObject::new()), |_| unreachable!());
        let err = validate(&shape, json!({ "country": null })).unwrap_err();
        assert_eq!(err, InvocationError::validation("country", "must not be null"));
    }
}
