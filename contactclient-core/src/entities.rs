//! Core entity structures

use crate::{ClientId, ClientType, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Contact client configuration - one outbound delivery destination.
///
/// The entity is pure state: JSON-carrying fields hold raw text and are never
/// eagerly parsed, and all editing flows through the form builder's
/// validate/apply cycle. Empty text and `None` are equivalent for the
/// optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClientConfig {
    /// `None` until first persisted.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub id: Option<ClientId>,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    /// Delivery mechanism; required before the entity can be saved.
    pub client_type: Option<ClientType>,
    /// Raw JSON object text describing the API delivery payload.
    pub api_payload: Option<String>,
    /// Raw JSON object text describing the file delivery payload.
    pub file_payload: Option<String>,
    /// Default revenue attribution per delivered contact.
    pub attribution_default: Option<f64>,
    /// Raw JSON object text with attribution overrides.
    pub attribution_settings: Option<String>,
    /// Raw JSON object text with duplicate-rejection rules.
    pub duplicate_rules: Option<String>,
    /// Raw JSON object text with exclusivity rules.
    pub exclusive_rules: Option<String>,
    /// Skip exclusivity checks entirely. Admin-only edit.
    pub exclusive_ignore: bool,
    /// Raw JSON object text with contact filter rules.
    pub filter_rules: Option<String>,
    /// Raw JSON object text with delivery caps.
    pub limits: Option<String>,
    pub limits_queue_enabled: bool,
    /// Days to spread queued contacts over when a cap is hit. Stored value
    /// may be stale/out-of-range; readers clamp to [1, 7].
    pub limits_queue_spread: i64,
    /// IANA timezone name; `None` means the system default.
    pub schedule_timezone: Option<String>,
    /// Raw JSON array text with open-hours definitions.
    pub schedule_hours: Option<String>,
    pub schedule_queue_enabled: bool,
    /// Days to spread contacts queued outside schedule. Same clamp as above.
    pub schedule_queue_spread: i64,
    /// Raw JSON array text with exclusion dates.
    pub schedule_exclusions: Option<String>,
    /// Comma-serialized set of do-not-contact channel ids.
    pub dnc_channels: Option<String>,
    pub category: Option<String>,
    pub published: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub publish_up: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub publish_down: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

impl ClientConfig {
    /// Create a fresh, unsaved entity. All optional fields start absent and
    /// both queue spreads start at the range minimum.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            description: None,
            website: None,
            client_type: None,
            api_payload: None,
            file_payload: None,
            attribution_default: None,
            attribution_settings: None,
            duplicate_rules: None,
            exclusive_rules: None,
            exclusive_ignore: false,
            filter_rules: None,
            limits: None,
            limits_queue_enabled: false,
            limits_queue_spread: crate::SPREAD_MIN,
            schedule_timezone: None,
            schedule_hours: None,
            schedule_queue_enabled: false,
            schedule_queue_spread: crate::SPREAD_MIN,
            schedule_exclusions: None,
            dnc_channels: None,
            category: None,
            published: false,
            publish_up: None,
            publish_down: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign a persisted identity.
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the delivery mechanism.
    pub fn with_client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }

    /// Set the API payload text.
    pub fn with_api_payload(mut self, payload: impl Into<String>) -> Self {
        self.api_payload = Some(payload.into());
        self
    }

    /// Set the file payload text.
    pub fn with_file_payload(mut self, payload: impl Into<String>) -> Self {
        self.file_payload = Some(payload.into());
        self
    }

    /// Set the published flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Set the comma-serialized do-not-contact channels.
    pub fn with_dnc_channels(mut self, channels: impl Into<String>) -> Self {
        self.dnc_channels = Some(channels.into());
        self
    }

    /// True until the entity has been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Do-not-contact channel ids as a list, split out of the stored
    /// comma-serialized form. Whitespace and empty segments are dropped.
    pub fn dnc_channel_set(&self) -> Vec<String> {
        self.dnc_channels
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Store a channel list back into the comma-serialized form. An empty
    /// list clears the field.
    pub fn set_dnc_channel_list(&mut self, channels: &[String]) {
        if channels.is_empty() {
            self.dnc_channels = None;
        } else {
            self.dnc_channels = Some(channels.join(","));
        }
    }

    /// Publish state of the entity.
    ///
    /// With `check_dates` the flag only counts while inside the
    /// publish-up/publish-down window. Without it ("draft view") only the
    /// stored flag matters, so a scheduled-future entity still reads as
    /// published to its editor.
    pub fn is_published(&self, check_dates: bool) -> bool {
        if !self.published {
            return false;
        }
        if !check_dates {
            return true;
        }
        let now = Utc::now();
        if let Some(up) = self.publish_up {
            if up > now {
                return false;
            }
        }
        if let Some(down) = self.publish_down {
            if down < now {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_entity_is_new_and_unpublished() {
        let config = ClientConfig::new("Acme feed");
        assert!(config.is_new());
        assert!(!config.is_published(false));
        assert!(!config.is_published(true));
        assert_eq!(config.limits_queue_spread, 1);
        assert_eq!(config.schedule_queue_spread, 1);
    }

    #[test]
    fn test_with_id_marks_persisted() {
        let config = ClientConfig::new("Acme feed").with_id(crate::new_client_id());
        assert!(!config.is_new());
    }

    #[test]
    fn test_dnc_channel_set_splits_and_trims() {
        let config = ClientConfig::new("c").with_dnc_channels("email, sms,,push ");
        assert_eq!(config.dnc_channel_set(), vec!["email", "sms", "push"]);
    }

    #[test]
    fn test_dnc_channel_set_empty_when_unset() {
        let config = ClientConfig::new("c");
        assert!(config.dnc_channel_set().is_empty());
    }

    #[test]
    fn test_set_dnc_channel_list_round_trips() {
        let mut config = ClientConfig::new("c");
        config.set_dnc_channel_list(&["email".to_string(), "sms".to_string()]);
        assert_eq!(config.dnc_channels.as_deref(), Some("email,sms"));
        assert_eq!(config.dnc_channel_set(), vec!["email", "sms"]);

        config.set_dnc_channel_list(&[]);
        assert!(config.dnc_channels.is_none());
    }

    #[test]
    fn test_is_published_draft_view_ignores_dates() {
        let mut config = ClientConfig::new("c").with_published(true);
        config.publish_up = Some(Utc::now() + Duration::days(1));
        assert!(config.is_published(false));
        assert!(!config.is_published(true));
    }

    #[test]
    fn test_is_published_respects_window() {
        let mut config = ClientConfig::new("c").with_published(true);
        config.publish_up = Some(Utc::now() - Duration::days(1));
        config.publish_down = Some(Utc::now() + Duration::days(1));
        assert!(config.is_published(true));

        config.publish_down = Some(Utc::now() - Duration::hours(1));
        assert!(!config.is_published(true));
        assert!(config.is_published(false));
    }

    #[test]
    fn test_unpublished_stays_unpublished_in_both_views() {
        let config = ClientConfig::new("c");
        assert!(!config.is_published(true));
        assert!(!config.is_published(false));
    }
}
