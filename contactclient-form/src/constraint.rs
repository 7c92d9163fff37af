//! Validation constraints attached to field descriptors

use contactclient_core::{is_json_array_text, is_json_object_text, FieldError};
use serde::Serialize;
use serde_json::Value;

/// One validation rule on a submitted field value.
///
/// `Null` always passes every constraint: absence is handled by the separate
/// required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Constraint {
    /// Text value must be empty or parse as a JSON object.
    JsonObjectText,
    /// Text value must be empty or parse as a JSON array.
    JsonArrayText,
    /// Integer value must lie in the closed range. Only enforced in strict
    /// validation; the default pipeline clamps instead.
    IntRange { min: i64, max: i64 },
    /// Value must be one of the listed options. A value outside the set is
    /// reported as a missing required value - the widget makes out-of-set
    /// submissions unrepresentable, so an unknown value means no valid
    /// selection was made.
    OneOf {
        #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
        options: &'static [&'static str],
    },
}

impl Constraint {
    /// Check a submitted value, returning the failure if any.
    pub fn check(&self, field: &str, value: &Value) -> Option<FieldError> {
        if value.is_null() {
            return None;
        }
        match self {
            Constraint::JsonObjectText => match value {
                Value::String(text) if is_json_object_text(text) => None,
                Value::Object(_) => None,
                _ => Some(FieldError::InvalidJsonObject {
                    field: field.to_string(),
                }),
            },
            Constraint::JsonArrayText => match value {
                Value::String(text) if is_json_array_text(text) => None,
                Value::Array(_) => None,
                _ => Some(FieldError::InvalidJsonArray {
                    field: field.to_string(),
                }),
            },
            Constraint::IntRange { min, max } => {
                // Unparseable numbers degrade to the range minimum elsewhere,
                // so only a clearly out-of-range integer is an error.
                let parsed = match value {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                match parsed {
                    Some(n) if n < *min || n > *max => Some(FieldError::OutOfRange {
                        field: field.to_string(),
                        value: n,
                        min: *min,
                        max: *max,
                    }),
                    _ => None,
                }
            }
            Constraint::OneOf { options } => match value {
                Value::String(s) if options.contains(&s.as_str()) => None,
                _ => Some(FieldError::RequiredMissing {
                    field: field.to_string(),
                }),
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
