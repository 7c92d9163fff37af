//! Static field-specification table
//!
//! Every form field is one row of data here: kind, constraints, UI hints,
//! and function pointers computing the per-entity default, editability, and
//! choices. One generic loop in the builder consumes the table, so per-field
//! behavior lives in exactly one place and registration code is never
//! repeated.

use crate::constraint::Constraint;
use crate::descriptor::{Choice, UiHints};
use crate::publish::publish_state;
use contactclient_core::{
    clamp_spread, ChannelRegistry, ClientConfig, FieldKind, Permissions, Timestamp, SPREAD_MAX,
    SPREAD_MIN, PUBLISH_CAPABILITY,
};
use serde_json::{json, Value};

/// Everything a table row needs to compute its descriptor: the entity plus
/// the pre-resolved collaborator answers. Resolved once per build/validate
/// call so each row is a pure function of this context.
pub(crate) struct BuildContext<'a> {
    pub config: &'a ClientConfig,
    pub is_admin: bool,
    pub can_publish: bool,
    pub channels: Vec<contactclient_core::Channel>,
}

impl<'a> BuildContext<'a> {
    pub(crate) fn new(
        config: &'a ClientConfig,
        permissions: &dyn Permissions,
        registry: &dyn ChannelRegistry,
    ) -> Self {
        Self {
            config,
            is_admin: permissions.is_admin(),
            can_publish: permissions.has_capability(PUBLISH_CAPABILITY),
            channels: registry.list_channels(),
        }
    }
}

/// One row of the field table.
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: &'static [Constraint],
    pub ui: UiHints,
    pub default: fn(&BuildContext) -> Value,
    pub read_only: fn(&BuildContext) -> bool,
    pub choices: fn(&BuildContext) -> Vec<Choice>,
}

/// Valid values of the `type` field.
pub(crate) const CLIENT_TYPE_OPTIONS: &[&str] = &["api", "file"];

const NO_CONSTRAINTS: &[Constraint] = &[];
const JSON_OBJECT: &[Constraint] = &[Constraint::JsonObjectText];
const JSON_ARRAY: &[Constraint] = &[Constraint::JsonArrayText];
const SPREAD_RANGE: &[Constraint] = &[Constraint::IntRange {
    min: SPREAD_MIN,
    max: SPREAD_MAX,
}];
const TYPE_ONE_OF: &[Constraint] = &[Constraint::OneOf {
    options: CLIENT_TYPE_OPTIONS,
}];

const HIDDEN_EDITOR: UiHints = UiHints {
    rows: Some(12),
    hidden: true,
    group: None,
};

/// The complete field table, in presentation order.
pub(crate) static FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        required: true,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| Value::String(ctx.config.name.clone()),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::LongText,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_text(&ctx.config.description),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "api_payload",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: UiHints::editor_panel("api-payload"),
        default: |ctx| opt_text(&ctx.config.api_payload),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "file_payload",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: UiHints::editor_panel("file-payload"),
        default: |ctx| opt_text(&ctx.config.file_payload),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "website",
        kind: FieldKind::Url,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_text(&ctx.config.website),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "attribution_default",
        kind: FieldKind::Number,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| match ctx.config.attribution_default {
            Some(v) => json!(v),
            None => Value::Null,
        },
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "attribution_settings",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.attribution_settings),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "duplicate_rules",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.duplicate_rules),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "exclusive_rules",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.exclusive_rules),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "exclusive_ignore",
        kind: FieldKind::Boolean,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| Value::Bool(ctx.config.exclusive_ignore),
        read_only: |ctx| !ctx.is_admin,
        choices: no_choices,
    },
    FieldSpec {
        name: "filter_rules",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.filter_rules),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "limits",
        kind: FieldKind::JsonObject,
        required: false,
        constraints: JSON_OBJECT,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.limits),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "limits_queue_enabled",
        kind: FieldKind::Boolean,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| Value::Bool(ctx.config.limits_queue_enabled),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "limits_queue_spread",
        kind: FieldKind::Range,
        required: false,
        constraints: SPREAD_RANGE,
        ui: UiHints::NONE,
        default: |ctx| json!(clamp_spread(ctx.config.limits_queue_spread)),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "schedule_timezone",
        kind: FieldKind::Choice,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_text(&ctx.config.schedule_timezone),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "schedule_hours",
        kind: FieldKind::JsonArray,
        required: false,
        constraints: JSON_ARRAY,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.schedule_hours),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "schedule_queue_enabled",
        kind: FieldKind::Boolean,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| Value::Bool(ctx.config.schedule_queue_enabled),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "schedule_queue_spread",
        kind: FieldKind::Range,
        required: false,
        constraints: SPREAD_RANGE,
        ui: UiHints::NONE,
        default: |ctx| json!(clamp_spread(ctx.config.schedule_queue_spread)),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "schedule_exclusions",
        kind: FieldKind::JsonArray,
        required: false,
        constraints: JSON_ARRAY,
        ui: HIDDEN_EDITOR,
        default: |ctx| opt_text(&ctx.config.schedule_exclusions),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "dnc_channels",
        kind: FieldKind::MultiChoice,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| {
            Value::Array(
                ctx.config
                    .dnc_channel_set()
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            )
        },
        read_only: editable,
        choices: |ctx| {
            ctx.channels
                .iter()
                .map(|c| Choice::new(c.id.clone(), c.label.clone()))
                .collect()
        },
    },
    FieldSpec {
        name: "category",
        kind: FieldKind::Choice,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_text(&ctx.config.category),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "is_published",
        kind: FieldKind::Boolean,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| {
            let state = publish_state(ctx.config.is_new(), ctx.can_publish, ctx.config.published);
            Value::Bool(state.default)
        },
        read_only: |ctx| {
            publish_state(ctx.config.is_new(), ctx.can_publish, ctx.config.published).read_only
        },
        choices: no_choices,
    },
    FieldSpec {
        name: "publish_up",
        kind: FieldKind::DateTime,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_datetime(&ctx.config.publish_up),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "publish_down",
        kind: FieldKind::DateTime,
        required: false,
        constraints: NO_CONSTRAINTS,
        ui: UiHints::NONE,
        default: |ctx| opt_datetime(&ctx.config.publish_down),
        read_only: editable,
        choices: no_choices,
    },
    FieldSpec {
        name: "type",
        kind: FieldKind::Choice,
        required: true,
        constraints: TYPE_ONE_OF,
        ui: UiHints {
            rows: None,
            hidden: false,
            group: Some("type-toggle"),
        },
        default: |ctx| match ctx.config.client_type {
            Some(ty) => Value::String(ty.as_str().to_string()),
            None => Value::Null,
        },
        read_only: editable,
        choices: |_| {
            vec![
                Choice::new("api", "API"),
                Choice::new("file", "File"),
            ]
        },
    },
];

fn editable(_: &BuildContext) -> bool {
    false
}

fn no_choices(_: &BuildContext) -> Vec<Choice> {
    Vec::new()
}

fn opt_text(value: &Option<String>) -> Value {
    match value {
        Some(text) => Value::String(text.clone()),
        None => Value::Null,
    }
}

fn opt_datetime(value: &Option<Timestamp>) -> Value {
    match value {
        Some(ts) => Value::String(ts.to_rfc3339()),
        None => Value::Null,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_presentation_order() {
        let names: Vec<&str> = FIELD_SPECS.iter().map(|s| s.name).collect();
        assert_eq!(names.first(), Some(&"name"));
        assert_eq!(names.last(), Some(&"type"));
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<&str> = FIELD_SPECS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_SPECS.len());
    }

    #[test]
    fn test_json_fields_carry_shape_constraints() {
        for name in [
            "api_payload",
            "file_payload",
            "attribution_settings",
            "duplicate_rules",
            "exclusive_rules",
            "filter_rules",
            "limits",
        ] {
            let spec = FIELD_SPECS.iter().find(|s| s.name == name).unwrap();
            assert_eq!(spec.kind, FieldKind::JsonObject, "{name}");
            assert_eq!(spec.constraints, JSON_OBJECT, "{name}");
        }
        for name in ["schedule_hours", "schedule_exclusions"] {
            let spec = FIELD_SPECS.iter().find(|s| s.name == name).unwrap();
            assert_eq!(spec.kind, FieldKind::JsonArray, "{name}");
            assert_eq!(spec.constraints, JSON_ARRAY, "{name}");
        }
    }

    #[test]
    fn test_only_name_and_type_are_required() {
        let required: Vec<&str> = FIELD_SPECS
            .iter()
            .filter(|s| s.required)
            .map(|s| s.name)
            .collect();
        assert_eq!(required, vec!["name", "type"]);
    }
}
