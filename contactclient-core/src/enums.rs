//! Enum types for contact client entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CORE ENUMS
// ============================================================================

/// Delivery mechanism of a contact client.
///
/// Toggling the type switches which payload definition is relevant
/// (`api_payload` vs `file_payload`); both stay present on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Contacts are posted to a remote API endpoint.
    Api,
    /// Contacts are accumulated into a file for periodic delivery.
    File,
}

impl ClientType {
    /// Stable string form used in storage and form submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Api => "api",
            ClientType::File => "file",
        }
    }

    /// Parse the stable string form.
    pub fn from_db_str(s: &str) -> Result<Self, ClientTypeParseError> {
        match s {
            "api" => Ok(ClientType::Api),
            "file" => Ok(ClientType::File),
            other => Err(ClientTypeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = ClientTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid client type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTypeParseError(pub String);

impl fmt::Display for ClientTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid client type: {}", self.0)
    }
}

impl std::error::Error for ClientTypeParseError {}

/// Widget-independent kind of a form field.
///
/// Used by descriptor consumers to pick a rendering and by the validator
/// to select the applicable shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    LongText,
    /// URL text input
    Url,
    /// Numeric input
    Number,
    /// Yes/no toggle
    Boolean,
    /// Single selection from a list
    Choice,
    /// Multiple selections from a list
    MultiChoice,
    /// Bounded integer slider
    Range,
    /// Date and time picker
    DateTime,
    /// Raw text holding a JSON object
    JsonObject,
    /// Raw text holding a JSON array
    JsonArray,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FieldKind::Text => "text",
            FieldKind::LongText => "long-text",
            FieldKind::Url => "url",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Choice => "choice",
            FieldKind::MultiChoice => "multi-choice",
            FieldKind::Range => "range",
            FieldKind::DateTime => "date-time",
            FieldKind::JsonObject => "json-object",
            FieldKind::JsonArray => "json-array",
        };
        write!(f, "{}", value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
