//! Structural schema validation.

use serde_json::Value;
use thiserror::Error;

/// A schema violation, with the path to the offending value.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: &'static str,
    },

    #[error("{path}: missing required field '{field}'")]
    MissingField { path: String, field: String },

    #[error("{path}: unknown field '{field}'")]
    UnknownField { path: String, field: String },

    #[error("{path}: value not in enum")]
    NotInEnum { path: String },
}

/// Validates a JSON value against a schema before it reaches a handler.
///
/// The full validation engine is an external collaborator; this trait is
/// the seam it plugs into.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &Value, value: &Value) -> Result<(), SchemaError>;
}

/// Validator for the structural subset of JSON Schema the builder emits.
///
/// Checks `type` tags (including nullable type arrays), `required` members,
/// `additionalProperties: false`, `items`, and `enum`. Schema constructs it
/// does not recognize are ignored rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralValidator;

impl SchemaValidator for StructuralValidator {
    fn validate(&self, schema: &Value, value: &Value) -> Result<(), SchemaError> {
        check(schema, value, "$")
    }
}

fn check(schema: &Value, value: &Value, path: &str) -> Result<(), SchemaError> {
    let Some(schema) = schema.as_object() else {
        return Ok(());
    };

    if let Some(ty) = schema.get("type") {
        if !type_matches(ty, value) {
            return Err(SchemaError::TypeMismatch {
                path: path.to_string(),
                expected: type_name(ty),
                found: value_kind(value),
            });
        }
    }

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            return Err(SchemaError::NotInEnum {
                path: path.to_string(),
            });
        }
    }

    if let Some(obj) = value.as_object() {
        let properties = schema.get("properties").and_then(Value::as_object);

        if let Some(required) = schema.get("required").and_then(Value::as_array) {
            for field in required.iter().filter_map(Value::as_str) {
                if !obj.contains_key(field) {
                    return Err(SchemaError::MissingField {
                        path: path.to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }

        let closed = schema.get("additionalProperties") == Some(&Value::Bool(false));

        for (key, member) in obj {
            match properties.and_then(|p| p.get(key)) {
                Some(subschema) => check(subschema, member, &format!("{path}.{key}"))?,
                None if closed => {
                    return Err(SchemaError::UnknownField {
                        path: path.to_string(),
                        field: key.clone(),
                    });
                }
                None => {}
            }
        }
    }

    if let (Some(items), Some(elements)) = (schema.get("items"), value.as_array()) {
        for (i, element) in elements.iter().enumerate() {
            check(items, element, &format!("{path}[{i}]"))?;
        }
    }

    Ok(())
}

/// Whether the value matches the schema's `type` tag(s).
fn type_matches(ty: &Value, value: &Value) -> bool {
    match ty {
        Value::String(tag) => tag_matches(tag, value),
        Value::Array(tags) => tags
            .iter()
            .filter_map(Value::as_str)
            .any(|tag| tag_matches(tag, value)),
        _ => true,
    }
}

fn tag_matches(tag: &str, value: &Value) -> bool {
    match tag {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_name(ty: &Value) -> String {
    match ty {
        Value::String(tag) => tag.clone(),
        Value::Array(tags) => tags
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        _ => "any".to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
