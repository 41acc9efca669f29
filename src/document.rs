//! The parsed configuration document.
//!
//! YAML is parsed into `serde_yaml::Value` and converted into a JSON object.
//! `serde_json` is built with `preserve_order`, so keys keep the order they
//! have in the source file at every nesting level.
//!
//! # Conversion rules
//!
//! - An empty stream or a falsy top-level value (`null`, `false`, `0`, `""`,
//!   `[]`) becomes an empty mapping.
//! - The top level must otherwise be a mapping.
//! - Merge keys (`<<`) are applied and YAML tags are dropped.
//! - Scalar mapping keys are rendered as JSON text (`1`, `true`, `null`);
//!   sequence and mapping keys are rejected.
//! - `.nan` and `.inf` have no JSON form and are rejected.

use crate::error::{ConfigError, Result};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// A configuration file parsed into an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: Map<String, Value>,
}

impl ConfigDocument {
    /// Parse YAML text into a document.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - The top-level mapping, possibly empty
    /// * `Err(ConfigError::Yaml)` - The text is not well-formed YAML
    /// * `Err(ConfigError::InvalidDocument)` - Well-formed YAML with no JSON form
    /// * `Err(ConfigError::NotAMapping)` - The top level is a non-empty scalar or sequence
    pub fn parse(text: &str) -> Result<Self> {
        let mut value: YamlValue =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml { source })?;

        value
            .apply_merge()
            .map_err(|source| ConfigError::Yaml { source })?;

        match to_json(value)? {
            Value::Object(entries) => Ok(Self { entries }),
            other if is_falsy(&other) => Ok(Self::default()),
            other => Err(ConfigError::NotAMapping {
                found: describe(&other),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Compact JSON with no whitespace after separators, e.g. `{"a":{"b":1}}`.
    pub fn to_compact_json(&self) -> String {
        // A map of JSON values with string keys always serializes.
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }
}

fn to_json(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => Value::Number(to_json_number(&n)?),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, to_json(value)?);
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => to_json(tagged.value)?,
    })
}

fn to_json_number(n: &serde_yaml::Number) -> Result<Number> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        n.as_f64().and_then(Number::from_f64).ok_or_else(|| {
            ConfigError::InvalidDocument(format!("number {} cannot be represented in JSON", n))
        })
    }
}

fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(to_json_number(&n)?.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(ConfigError::InvalidDocument(
            "mapping keys must be scalars, found a collection".to_string(),
        )),
    }
}

/// Values that stand in for "no config" at the top level.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
