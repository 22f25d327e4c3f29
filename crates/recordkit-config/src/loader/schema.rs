//! Key and type checks applied to each layer before merging.
//!
//! The allowed shape is a static table so that every layer, and the merged
//! result, is checked by the same walk.

use crate::ConfigError;
use serde_json::Value;

/// Expected shape of one value.
enum Rule {
    /// An object whose keys must appear in the table.
    Section(&'static [(&'static str, Rule)]),
    /// Any string.
    Text,
    /// One of a fixed set of strings.
    OneOf(&'static [&'static str]),
}

const ROOT: Rule = Rule::Section(&[
    (
        "serialization",
        Rule::Section(&[("timestamp_style", Rule::OneOf(&["rfc3339", "naive"]))]),
    ),
    ("logging", Rule::Section(&[("level", Rule::Text)])),
]);

/// Check a layer, labelling errors with `layer`.
pub(super) fn validate_layer_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    check(value, &ROOT, layer, "")
}

fn check(value: &Value, rule: &Rule, layer: &str, path: &str) -> Result<(), ConfigError> {
    match rule {
        Rule::Section(fields) => {
            let Value::Object(map) = value else {
                return Err(violation(layer, path, "expected object".to_string()));
            };
            for (key, nested) in map {
                let nested_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                let Some((_, nested_rule)) = fields.iter().find(|(name, _)| *name == key.as_str())
                else {
                    return Err(violation(layer, &nested_path, "unknown key".to_string()));
                };
                check(nested, nested_rule, layer, &nested_path)?;
            }
            Ok(())
        }
        Rule::Text => match value {
            Value::String(_) => Ok(()),
            _ => Err(violation(layer, path, "expected string".to_string())),
        },
        Rule::OneOf(choices) => match value.as_str() {
            Some(text) if choices.iter().any(|choice| *choice == text) => Ok(()),
            Some(text) => Err(violation(
                layer,
                path,
                format!("`{text}` is not one of {}", choices.join(", ")),
            )),
            None => Err(violation(layer, path, "expected string".to_string())),
        },
    }
}

fn violation(layer: &str, path: &str, message: String) -> ConfigError {
    ConfigError::Schema {
        location: format!("{layer}:{}", if path.is_empty() { "root" } else { path }),
        message,
    }
}
