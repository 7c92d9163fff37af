//! Field descriptors emitted by the form builder
//!
//! A descriptor describes one editable attribute - kind, constraints,
//! computed default, editability - independent of any UI toolkit. The list is
//! an output type: consumers render it or feed submissions back through the
//! validator, they never construct descriptors themselves.

use crate::Constraint;
use contactclient_core::FieldKind;
use serde::Serialize;
use serde_json::Value;

/// One selectable option of a choice or multi-choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Opaque rendering hints carried through to the UI layer.
///
/// Nothing here affects validation. `group` marks fields whose visibility
/// the consumer toggles together (e.g. the payload editors swapped by the
/// `type` field).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UiHints {
    /// Preferred editor height for long-text fields.
    pub rows: Option<u32>,
    /// Start hidden; revealed by a consumer-side toggle.
    pub hidden: bool,
    /// Visibility group toggled as a unit.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub group: Option<&'static str>,
}

impl UiHints {
    pub const NONE: UiHints = UiHints {
        rows: None,
        hidden: false,
        group: None,
    };

    /// Hidden JSON editor panel, the common shape for rule fields.
    pub const fn editor_panel(group: &'static str) -> UiHints {
        UiHints {
            rows: Some(12),
            hidden: true,
            group: Some(group),
        }
    }
}

/// Data record describing one editable attribute of the entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldDescriptor {
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Read-only for the caller the form was built for. Submitted changes to
    /// a read-only field are rejected as forbidden mutations.
    pub read_only: bool,
    /// Computed default, already normalized (e.g. spreads arrive clamped).
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub default: Value,
    pub constraints: Vec<Constraint>,
    /// Options for choice and multi-choice kinds; empty otherwise.
    pub choices: Vec<Choice>,
    pub ui_hints: UiHints,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_panel_hints() {
        let hints = UiHints::editor_panel("limits");
        assert_eq!(hints.rows, Some(12));
        assert!(hints.hidden);
        assert_eq!(hints.group, Some("limits"));
    }

    #[test]
    fn test_choice_constructor() {
        let choice = Choice::new("email", "Email");
        assert_eq!(choice.value, "email");
        assert_eq!(choice.label, "Email");
    }

    #[test]
    fn test_descriptor_serializes_for_consumers() {
        let descriptor = FieldDescriptor {
            name: "type",
            kind: FieldKind::Choice,
            required: true,
            read_only: false,
            default: Value::Null,
            constraints: vec![],
            choices: vec![Choice::new("api", "API"), Choice::new("file", "File")],
            ui_hints: UiHints::NONE,
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["name"], "type");
        assert_eq!(json["kind"], "choice");
        assert_eq!(json["choices"][1]["value"], "file");
    }
}
