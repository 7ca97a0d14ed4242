//! Builders for JSON Schema values.
//!
//! ```
//! use notework::schema;
//!
//! let input = schema::object()
//!     .property("query", schema::nullable(schema::string().description("The search query")))
//!     .property("limit", schema::nullable(schema::integer().description("Maximum number of results")))
//!     .build();
//! ```

use serde_json::{Map, Value, json};

/// Start an object schema.
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

/// A string field schema.
pub fn string() -> FieldSchema {
    FieldSchema::new("string")
}

/// An integer field schema.
pub fn integer() -> FieldSchema {
    FieldSchema::new("integer")
}

/// A number field schema.
pub fn number() -> FieldSchema {
    FieldSchema::new("number")
}

/// A boolean field schema.
pub fn boolean() -> FieldSchema {
    FieldSchema::new("boolean")
}

/// An array schema with the given item schema.
pub fn array(items: impl Into<Value>) -> FieldSchema {
    let mut field = FieldSchema::new("array");
    field.items = Some(items.into());
    field
}

/// Widen a schema so that `null` is also accepted.
///
/// Turns `"type": "string"` into `"type": ["string", "null"]`; a type that
/// is already an array gets `"null"` appended.
pub fn nullable(schema: impl Into<Value>) -> Value {
    let mut value = schema.into();

    if let Some(obj) = value.as_object_mut() {
        let widened = match obj.get("type") {
            Some(Value::String(ty)) => json!([ty, "null"]),
            Some(Value::Array(types)) => {
                let mut types = types.clone();
                if !types.iter().any(|t| t == "null") {
                    types.push(json!("null"));
                }
                Value::Array(types)
            }
            _ => json!(["null"]),
        };
        obj.insert("type".to_string(), widened);
    }

    value
}

/// Builder for a primitive or array schema.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    ty: &'static str,
    description: Option<String>,
    items: Option<Value>,
    enum_values: Option<Vec<Value>>,
}

impl FieldSchema {
    fn new(ty: &'static str) -> Self {
        Self {
            ty,
            description: None,
            items: None,
            enum_values: None,
        }
    }

    /// Set the human-readable description shown to the agent.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the value to a fixed set.
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Finish the schema.
    pub fn build(self) -> Value {
        Value::from(self)
    }
}

impl From<FieldSchema> for Value {
    fn from(field: FieldSchema) -> Self {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(field.ty));
        if let Some(description) = field.description {
            obj.insert("description".to_string(), json!(description));
        }
        if let Some(items) = field.items {
            obj.insert("items".to_string(), items);
        }
        if let Some(values) = field.enum_values {
            obj.insert("enum".to_string(), Value::Array(values));
        }
        Value::Object(obj)
    }
}

/// Builder for an object schema.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    properties: Map<String, Value>,
    required: Vec<String>,
    additional_properties: Option<bool>,
    description: Option<String>,
}

impl ObjectSchema {
    fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>, schema: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Add a property and mark it required.
    pub fn required_property(self, name: impl Into<String>, schema: impl Into<Value>) -> Self {
        let name = name.into();
        self.property(name.clone(), schema).require([name])
    }

    /// Mark property names as required.
    pub fn require<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set whether properties outside `properties` are accepted.
    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    /// Set the human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Finish the schema.
    pub fn build(self) -> Value {
        Value::from(self)
    }
}

impl From<ObjectSchema> for Value {
    fn from(schema: ObjectSchema) -> Self {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("object"));
        obj.insert("properties".to_string(), Value::Object(schema.properties));
        if !schema.required.is_empty() {
            obj.insert("required".to_string(), json!(schema.required));
        }
        if let Some(allowed) = schema.additional_properties {
            obj.insert("additionalProperties".to_string(), json!(allowed));
        }
        if let Some(description) = schema.description {
            obj.insert("description".to_string(), json!(description));
        }
        Value::Object(obj)
    }
}
