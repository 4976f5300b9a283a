//! Schema validation: the capability contract and a declarative
//! implementation of it.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::tree::ErrorTree;

/// A validated entity: a JSON object holding a string `id` plus the fields
/// its schema declares.
pub type Entity = Map<String, Value>;

/// The validation capability the entity generator is parametric over.
///
/// Both methods return a tagged result rather than raising; the generated
/// operations decide when a failure becomes an error the caller observes.
/// Implementations must never panic on malformed input.
pub trait Schema {
    /// Full validation: `id` plus every required field.
    fn parse_full(&self, input: Option<&Value>) -> Result<Entity, ErrorTree>;

    /// Partial validation: only `id` is required; present fields are
    /// type-checked, absent fields are ignored.
    fn parse_partial(&self, input: Option<&Value>) -> Result<Entity, ErrorTree>;
}

/// Expected type of a declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Number,
    Bool,
    Array,
    /// A nested object validated against its own record schema; failures
    /// appear as a nested tree under the field name. Nested records are
    /// always fully validated, even inside a partial parse.
    Record(RecordSchema),
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Bool => "boolean",
            FieldType::Array => "array",
            FieldType::Record(_) => "object",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Record(_) => value.is_object(),
        }
    }
}

/// JSON type name used in mismatch messages.
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

#[derive(Debug, Clone, PartialEq)]
struct FieldSpec {
    field_type: FieldType,
    required: bool,
}

/// Declarative record schema: field name → expected type, required or
/// optional. `id` is implicitly a required string and need not be declared.
///
/// Unknown input fields are stripped from the parsed value, so what the
/// entity layer stores is exactly the declared shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSchema {
    fields: BTreeMap<String, FieldSpec>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    #[must_use]
    pub fn field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.insert(
            name.to_string(),
            FieldSpec {
                field_type,
                required: true,
            },
        );
        self
    }

    /// Declares an optional field: type-checked when present, never reported
    /// as missing.
    #[must_use]
    pub fn optional(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.insert(
            name.to_string(),
            FieldSpec {
                field_type,
                required: false,
            },
        );
        self
    }

    fn parse(
        &self,
        input: Option<&Value>,
        require_all: bool,
        with_id: bool,
    ) -> Result<Entity, ErrorTree> {
        let object = match input {
            None => return Err(ErrorTree::root("Required")),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ErrorTree::root(format!(
                    "Expected object, received {}",
                    type_name(other)
                )));
            }
        };

        let mut tree = ErrorTree::new();
        let mut parsed = Entity::new();

        if with_id {
            match object.get("id") {
                None => tree.push_field("id", "Required"),
                Some(value @ Value::String(_)) => {
                    parsed.insert("id".to_string(), value.clone());
                }
                Some(other) => tree.push_field(
                    "id",
                    format!("Expected string, received {}", type_name(other)),
                ),
            }
        }

        for (name, spec) in &self.fields {
            if with_id && name == "id" {
                continue;
            }
            match object.get(name) {
                None => {
                    if require_all && spec.required {
                        tree.push_field(name.as_str(), "Required");
                    }
                }
                Some(value) => match &spec.field_type {
                    FieldType::Record(nested) => match nested.parse(Some(value), true, false) {
                        Ok(sub) => {
                            parsed.insert(name.clone(), Value::Object(sub));
                        }
                        Err(sub_tree) => tree.insert_field(name.as_str(), sub_tree),
                    },
                    field_type if field_type.matches(value) => {
                        parsed.insert(name.clone(), value.clone());
                    }
                    field_type => tree.push_field(
                        name.as_str(),
                        format!(
                            "Expected {}, received {}",
                            field_type.name(),
                            type_name(value)
                        ),
                    ),
                },
            }
        }

        if tree.is_empty() { Ok(parsed) } else { Err(tree) }
    }
}

impl Schema for RecordSchema {
    fn parse_full(&self, input: Option<&Value>) -> Result<Entity, ErrorTree> {
        self.parse(input, true, true)
    }

    fn parse_partial(&self, input: Option<&Value>) -> Result<Entity, ErrorTree> {
        self.parse(input, false, true)
    }
}
