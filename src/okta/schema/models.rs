//! User schema data models
//!
//! The schema document has two definitions, `base` (fixed attributes) and
//! `custom` (tenant-defined attributes). Each has a `properties` object and
//! an optional `required` list. Properties keep their declared order.

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{OktaError, Result};

/// Where an attribute is defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    Base,
    Custom,
}

/// One attribute definition from the schema document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// snake_case name for base fields, the property key for custom fields
    pub name: String,
    /// Property key used in the profile payload
    pub external_name: String,
    pub title: String,
    pub required: bool,
    pub origin: FieldOrigin,
}

#[derive(Deserialize, Debug)]
struct UserSchemaDocument {
    definitions: SchemaDefinitions,
}

#[derive(Deserialize, Debug)]
struct SchemaDefinitions {
    base: SchemaDefinition,
    #[serde(default)]
    custom: Option<SchemaDefinition>,
}

#[derive(Deserialize, Debug, Default)]
struct SchemaDefinition {
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    required: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct BaseProperty {
    title: Option<String>,
    required: Option<bool>,
}

/// Parse the schema document into an ordered field list (base first)
pub fn parse_user_schema(document: &Value) -> Result<Vec<SchemaField>> {
    let schema: UserSchemaDocument = serde_json::from_value(document.clone()).map_err(|e| {
        OktaError::MalformedResponse(format!("Failed to parse user schema: {}", e))
    })?;

    let base = &schema.definitions.base;
    let mut fields = Vec::with_capacity(base.properties.len());

    for (key, value) in &base.properties {
        let property: BaseProperty = serde_json::from_value(value.clone()).map_err(|e| {
            OktaError::MalformedResponse(format!("Invalid base schema property '{}': {}", key, e))
        })?;
        fields.push(SchemaField {
            name: to_snake_case(key),
            external_name: key.clone(),
            title: property.title.unwrap_or_else(|| key.clone()),
            required: property.required.unwrap_or(false) || base.required.contains(key),
            origin: FieldOrigin::Base,
        });
    }

    if let Some(custom) = &schema.definitions.custom {
        for (key, value) in &custom.properties {
            match custom_field(key, value, &custom.required) {
                Some(field) => fields.push(field),
                None => debug!("Skipping custom schema property '{}': missing title or required", key),
            }
        }
    }

    Ok(fields)
}

/// Custom properties are heterogeneous; incomplete ones are skipped
fn custom_field(key: &str, value: &Value, required_list: &[String]) -> Option<SchemaField> {
    let title = value.get("title")?.as_str()?;
    let required = match value.get("required").and_then(Value::as_bool) {
        Some(flag) => flag || required_list.iter().any(|r| r == key),
        None if required_list.iter().any(|r| r == key) => true,
        None => return None,
    };

    Some(SchemaField {
        name: key.to_string(),
        external_name: key.to_string(),
        title: title.to_string(),
        required,
        origin: FieldOrigin::Custom,
    })
}

/// `firstName` -> `first_name`
fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Value {
        serde_json::json!({
            "id": "https://dev.okta.com/meta/schemas/user/default",
            "definitions": {
                "base": {
                    "id": "#base",
                    "type": "object",
                    "properties": {
                        "login": {"title": "Username", "type": "string", "required": true},
                        "firstName": {"title": "First name", "type": "string", "required": true},
                        "lastName": {"title": "Last name", "type": "string", "required": true},
                        "middleName": {"title": "Middle name", "type": "string"},
                        "email": {"title": "Primary email", "type": "string", "required": true}
                    },
                    "required": ["login", "firstName", "lastName", "email"]
                },
                "custom": {
                    "id": "#custom",
                    "type": "object",
                    "properties": {
                        "employeeBadge": {"title": "Badge", "type": "string", "required": true},
                        "nickname2": {"title": "Alt nickname", "type": "string", "required": false},
                        "costCode": {"title": "Cost code", "type": "string"},
                        "broken": {"type": "string", "required": true}
                    },
                    "required": ["employeeBadge"]
                }
            }
        })
    }

    #[test]
    fn test_base_fields_in_declared_order() {
        let fields = parse_user_schema(&document()).unwrap();
        let base: Vec<&str> = fields
            .iter()
            .filter(|f| f.origin == FieldOrigin::Base)
            .map(|f| f.external_name.as_str())
            .collect();
        assert_eq!(base, vec!["login", "firstName", "lastName", "middleName", "email"]);
    }

    #[test]
    fn test_base_field_shape() {
        let fields = parse_user_schema(&document()).unwrap();
        let first = fields.iter().find(|f| f.external_name == "firstName").unwrap();
        assert_eq!(first.name, "first_name");
        assert_eq!(first.title, "First name");
        assert!(first.required);

        let middle = fields.iter().find(|f| f.external_name == "middleName").unwrap();
        assert!(!middle.required);
    }

    #[test]
    fn test_malformed_custom_fields_are_skipped() {
        let fields = parse_user_schema(&document()).unwrap();
        let custom: Vec<&str> = fields
            .iter()
            .filter(|f| f.origin == FieldOrigin::Custom)
            .map(|f| f.external_name.as_str())
            .collect();
        // costCode has no required flag, broken has no title
        assert_eq!(custom, vec!["employeeBadge", "nickname2"]);
    }

    #[test]
    fn test_required_list_marks_base_field() {
        let doc = serde_json::json!({
            "definitions": {
                "base": {
                    "properties": {"login": {"title": "Username"}},
                    "required": ["login"]
                }
            }
        });
        let fields = parse_user_schema(&doc).unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields[0].required);
    }

    #[test]
    fn test_missing_definitions_is_malformed() {
        let result = parse_user_schema(&serde_json::json!({"properties": {}}));
        assert!(matches!(result, Err(OktaError::MalformedResponse(_))));
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("honorificPrefix"), "honorific_prefix");
        assert_eq!(to_snake_case("email"), "email");
    }
}
