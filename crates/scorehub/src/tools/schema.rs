use serde::Serialize;
use serde_json::Value;

/// Static metadata for one tool, advertised to the reasoning oracle.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Unique identifier for this tool.
    pub name: String,
    /// One-line description the oracle selects on.
    pub description: String,
    /// JSON Schema for validating input arguments.
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Validate a JSON value against a minimal JSON Schema subset.
///
/// Supports: `type`, `required`, `properties` (recursive).
/// An empty schema `{}` passes anything. Returns the violation detail on
/// failure; the registry turns it into an `invalid_params` envelope.
pub fn validate_params(value: &Value, schema: &Value) -> Result<(), String> {
    // Empty schema passes anything
    let schema_obj = match schema.as_object() {
        Some(obj) => obj,
        None => return Ok(()),
    };

    if schema_obj.is_empty() {
        return Ok(());
    }

    // Check type constraint
    if let Some(type_val) = schema_obj.get("type") {
        let type_str = type_val
            .as_str()
            .ok_or_else(|| "schema 'type' must be a string".to_string())?;

        let matches = match type_str {
            "string" => value.is_string(),
            "number" => value.is_number(),
            "integer" => value.is_i64() || value.is_u64(),
            "boolean" => value.is_boolean(),
            "object" => value.is_object(),
            "array" => value.is_array(),
            "null" => value.is_null(),
            other => return Err(format!("unknown schema type: {other}")),
        };

        if !matches {
            return Err(format!(
                "expected type '{type_str}', got {}",
                json_type_name(value)
            ));
        }
    }

    // Check required fields (only meaningful for objects)
    if let Some(required) = schema_obj.get("required") {
        if let Some(required_arr) = required.as_array() {
            if let Some(obj) = value.as_object() {
                for req in required_arr {
                    if let Some(key) = req.as_str() {
                        if !obj.contains_key(key) {
                            return Err(format!("missing required field: '{key}'"));
                        }
                    }
                }
            }
        }
    }

    // Recursively validate properties
    if let Some(properties) = schema_obj.get("properties") {
        if let (Some(props_obj), Some(val_obj)) = (properties.as_object(), value.as_object()) {
            for (key, prop_schema) in props_obj {
                if let Some(prop_value) = val_obj.get(key) {
                    validate_params(prop_value, prop_schema)?;
                }
            }
        }
    }

    Ok(())
}

/// Returns a human-readable name for the JSON type of a value.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
