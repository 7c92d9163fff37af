//! Submission validation and application
//!
//! Validation walks the field table and collects every failure into one
//! report so a consumer can surface all problems at once. Application is
//! all-or-nothing: a report with any error (a forbidden mutation above all)
//! rejects the whole submission before a single field is written.

use crate::constraint::Constraint;
use crate::table::{BuildContext, FIELD_SPECS};
use chrono::{DateTime, Utc};
use contactclient_core::{
    spread_from_value, ClientConfig, FieldError, FieldKind, Timestamp, ValidationReport,
};
use serde_json::{Map, Value};

/// Validate a submission against the current entity state.
///
/// `strict` additionally reports `OutOfRange` for range-constrained values;
/// the default pipeline clamps those silently on write instead.
pub(crate) fn validate_submission(
    ctx: &BuildContext<'_>,
    submitted: &Map<String, Value>,
    strict: bool,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    for spec in FIELD_SPECS {
        let current = (spec.default)(ctx);
        let submitted_value = submitted.get(spec.name);

        if spec.required {
            let effective = submitted_value.unwrap_or(&current);
            if value_is_empty(effective) {
                report.push(FieldError::RequiredMissing {
                    field: spec.name.to_string(),
                });
                continue;
            }
        }

        let Some(value) = submitted_value else {
            continue;
        };

        if (spec.read_only)(ctx) && mutation_differs(spec.kind, value, &current) {
            report.push(FieldError::ForbiddenMutation {
                field: spec.name.to_string(),
            });
            continue;
        }

        for constraint in spec.constraints {
            if matches!(constraint, Constraint::IntRange { .. }) && !strict {
                continue;
            }
            if let Some(error) = constraint.check(spec.name, value) {
                report.push(error);
            }
        }
    }

    report
}

/// Write a validated submission onto the entity. Queue spreads are clamped
/// on write with the same clamp used for displayed defaults.
pub(crate) fn write_submission(config: &mut ClientConfig, submitted: &Map<String, Value>) {
    for spec in FIELD_SPECS {
        let Some(value) = submitted.get(spec.name) else {
            continue;
        };
        match spec.name {
            "name" => {
                if let Some(text) = value.as_str() {
                    config.name = text.to_string();
                }
            }
            "description" => config.description = opt_text_value(value),
            "api_payload" => config.api_payload = opt_text_value(value),
            "file_payload" => config.file_payload = opt_text_value(value),
            "website" => config.website = opt_text_value(value),
            "attribution_default" => config.attribution_default = value_as_f64(value),
            "attribution_settings" => config.attribution_settings = opt_text_value(value),
            "duplicate_rules" => config.duplicate_rules = opt_text_value(value),
            "exclusive_rules" => config.exclusive_rules = opt_text_value(value),
            "exclusive_ignore" => config.exclusive_ignore = value_as_bool(value),
            "filter_rules" => config.filter_rules = opt_text_value(value),
            "limits" => config.limits = opt_text_value(value),
            "limits_queue_enabled" => config.limits_queue_enabled = value_as_bool(value),
            "limits_queue_spread" => config.limits_queue_spread = spread_from_value(value),
            "schedule_timezone" => config.schedule_timezone = opt_text_value(value),
            "schedule_hours" => config.schedule_hours = opt_text_value(value),
            "schedule_queue_enabled" => config.schedule_queue_enabled = value_as_bool(value),
            "schedule_queue_spread" => config.schedule_queue_spread = spread_from_value(value),
            "schedule_exclusions" => config.schedule_exclusions = opt_text_value(value),
            "dnc_channels" => write_dnc_channels(config, value),
            "category" => config.category = opt_text_value(value),
            "is_published" => config.published = value_as_bool(value),
            "publish_up" => config.publish_up = datetime_value(value),
            "publish_down" => config.publish_down = datetime_value(value),
            "type" => {
                config.client_type = value.as_str().and_then(|s| s.parse().ok());
            }
            _ => {}
        }
    }
    config.updated_at = Utc::now();
}

/// Changed-vs-current check for the read-only guard. Boolean fields compare
/// after coercion so `true` and `"1"` do not read as different values.
fn mutation_differs(kind: FieldKind, submitted: &Value, current: &Value) -> bool {
    match kind {
        FieldKind::Boolean => value_as_bool(submitted) != value_as_bool(current),
        _ => submitted != current && !(value_is_empty(submitted) && value_is_empty(current)),
    }
}

fn value_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn value_as_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        _ => false,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn opt_text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn datetime_value(value: &Value) -> Option<Timestamp> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn write_dnc_channels(config: &mut ClientConfig, value: &Value) {
    match value {
        Value::Array(items) => {
            let channels: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect();
            config.set_dnc_channel_list(&channels);
        }
        _ => config.dnc_channels = opt_text_value(value),
    }
}

// =============================================================================
// TESTS
// =============================================================================
