//! Schema-driven attribute collection
//!
//! [`SchemaCollector`] walks a parsed user schema and builds an
//! [`AttributeSet`]: presets are applied first, anything still required is
//! asked through an [`InputSource`], and optional fields are asked only on
//! request.

mod input;

pub use input::{ask_yes_no, prompt_required, ConsoleInput, InputSource, ScriptedInput};

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{OktaError, Result};
use crate::okta::{FieldOrigin, SchemaField};

/// Insertion-ordered map of `external_name` to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; replacing keeps the original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Load presets from a JSON object file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            OktaError::Config(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            OktaError::Config(format!("Failed to parse seed file {}: {}", path.display(), e))
        })
    }

    /// Request body for user creation: `{"profile": {...}}`
    pub fn to_payload(&self) -> Value {
        serde_json::json!({ "profile": self })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Non-string JSON values keep their JSON text; `null` is dropped
impl From<Map<String, Value>> for AttributeSet {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Null => None,
                other => Some((key, other.to_string())),
            })
            .collect()
    }
}

/// Collects attribute values for a schema
pub struct SchemaCollector<'a> {
    schema: &'a [SchemaField],
}

impl<'a> SchemaCollector<'a> {
    pub fn new(schema: &'a [SchemaField]) -> Self {
        Self { schema }
    }

    /// Required fields in declared order, base before custom
    pub fn required_fields(&self) -> Vec<&'a SchemaField> {
        self.partition(true)
    }

    /// Optional fields in declared order, base before custom
    pub fn optional_fields(&self) -> Vec<&'a SchemaField> {
        self.partition(false)
    }

    fn partition(&self, required: bool) -> Vec<&'a SchemaField> {
        let selected = self.schema.iter().filter(|f| f.required == required);
        let (base, custom): (Vec<_>, Vec<_>) =
            selected.partition(|f| f.origin == FieldOrigin::Base);
        base.into_iter().chain(custom).collect()
    }

    /// Build the attribute set, prompting only for what presets do not cover
    pub fn collect(
        &self,
        presets: &AttributeSet,
        input: &mut dyn InputSource,
        include_optional: bool,
    ) -> Result<AttributeSet> {
        for key in presets.keys() {
            if !self.schema.iter().any(|f| f.external_name == key) {
                warn!("Ignoring preset '{}': not an attribute of the schema", key);
            }
        }

        let mut attributes = AttributeSet::new();

        for field in self.required_fields() {
            match presets.get(&field.external_name) {
                Some(value) => attributes.insert(field.external_name.as_str(), value),
                None => {
                    let value = input.prompt(&field.title)?;
                    attributes.insert(field.external_name.as_str(), value);
                }
            }
        }

        for field in self.optional_fields() {
            if let Some(value) = presets.get(&field.external_name) {
                attributes.insert(field.external_name.as_str(), value);
                continue;
            }
            if !include_optional {
                continue;
            }
            let value = input.prompt(&field.title)?;
            if value.is_empty() {
                debug!("No value for optional attribute '{}'", field.external_name);
            } else {
                attributes.insert(field.external_name.as_str(), value);
            }
        }

        debug!("Collected {} attributes", attributes.len());
        Ok(attributes)
    }
}
