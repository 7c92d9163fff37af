//! Contact Client Test Utilities
//!
//! Centralized test infrastructure for the contact client workspace:
//! - Mock permissions provider and channel registry
//! - Entity fixtures for common scenarios
//! - Proptest generators for entity state

use std::collections::HashSet;

// Re-export core types for convenience
pub use contactclient_core::{
    Channel, ChannelRegistry, ClientConfig, ClientError, ClientResult, ClientType, FieldError,
    FieldKind, Permissions, ValidationReport, PUBLISH_CAPABILITY,
};

// ============================================================================
// MOCK PROVIDERS
// ============================================================================

/// Mock permissions provider for testing.
///
/// Administrators implicitly hold every capability; editors hold only what
/// `grant` gives them.
#[derive(Debug, Clone, Default)]
pub struct MockPermissions {
    admin: bool,
    capabilities: HashSet<String>,
}

impl MockPermissions {
    /// Administrator: `is_admin` true, every capability granted.
    pub fn admin() -> Self {
        Self {
            admin: true,
            capabilities: HashSet::new(),
        }
    }

    /// Ordinary editor with no capability grants.
    pub fn editor() -> Self {
        Self::default()
    }

    /// Ordinary editor holding the publish capability.
    pub fn publisher() -> Self {
        Self::editor().grant(PUBLISH_CAPABILITY)
    }

    /// Grant one named capability.
    pub fn grant(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }
}

impl Permissions for MockPermissions {
    fn is_admin(&self) -> bool {
        self.admin
    }

    fn has_capability(&self, name: &str) -> bool {
        self.admin || self.capabilities.contains(name)
    }
}

/// In-memory channel registry returning a fixed, ordered channel list.
#[derive(Debug, Clone, Default)]
pub struct StaticChannelRegistry {
    channels: Vec<Channel>,
}

impl StaticChannelRegistry {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// The common three-channel fixture: email, sms, push.
    pub fn default_channels() -> Self {
        Self::new(vec![
            Channel::new("email", "Email"),
            Channel::new("sms", "Text Message"),
            Channel::new("push", "Push Notification"),
        ])
    }
}

impl ChannelRegistry for StaticChannelRegistry {
    fn list_channels(&self) -> Vec<Channel> {
        self.channels.clone()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Fresh, unsaved entity with only a name.
pub fn fresh_config() -> ClientConfig {
    ClientConfig::new("Acme lead feed")
}

/// Persisted, fully-populated entity that validates cleanly: API type, valid
/// payload text, opted-out channels, in-range spreads.
pub fn saved_config() -> ClientConfig {
    let mut config = ClientConfig::new("Acme lead feed")
        .with_id(contactclient_core::new_client_id())
        .with_client_type(ClientType::Api)
        .with_api_payload(r#"{"url": "https://api.example.com/leads", "method": "POST"}"#)
        .with_dnc_channels("email,sms");
    config.description = Some("Delivers qualified leads to Acme".to_string());
    config.website = Some("https://acme.example.com".to_string());
    config.limits = Some(r#"{"hourly": 10, "daily": 100}"#.to_string());
    config.schedule_hours =
        Some(r#"[{"day": "monday", "from": "09:00", "to": "17:00"}]"#.to_string());
    config.limits_queue_spread = 3;
    config.schedule_queue_spread = 2;
    config
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod strategies {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary stored spread value, including out-of-range garbage.
    pub fn arb_stored_spread() -> impl Strategy<Value = i64> {
        any::<i64>()
    }

    /// Arbitrary JSON object text.
    pub fn arb_json_object_text() -> impl Strategy<Value = String> {
        proptest::collection::btree_map("[a-z]{1,6}", any::<u16>(), 0..4).prop_map(|map| {
            serde_json::to_string(&map).expect("btree map serializes")
        })
    }

    /// Arbitrary JSON array text.
    pub fn arb_json_array_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<u16>(), 0..6)
            .prop_map(|items| serde_json::to_string(&items).expect("vec serializes"))
    }

    /// Arbitrary comma-serialized channel subset of the default registry.
    pub fn arb_dnc_channels() -> impl Strategy<Value = String> {
        proptest::sample::subsequence(vec!["email", "sms", "push"], 0..=3)
            .prop_map(|subset| subset.join(","))
    }

    /// Arbitrary persisted entity whose stored state may be messy
    /// (out-of-range spreads) but whose JSON text is well-formed.
    pub fn arb_saved_config() -> impl Strategy<Value = ClientConfig> {
        (
            arb_stored_spread(),
            arb_stored_spread(),
            arb_json_object_text(),
            arb_json_array_text(),
            arb_dnc_channels(),
            any::<bool>(),
        )
            .prop_map(
                |(limits_spread, schedule_spread, payload, hours, channels, published)| {
                    let mut config = saved_config().with_published(published);
                    config.limits_queue_spread = limits_spread;
                    config.schedule_queue_spread = schedule_spread;
                    config.api_payload = Some(payload);
                    config.schedule_hours = Some(hours);
                    config.dnc_channels = if channels.is_empty() {
                        None
                    } else {
                        Some(channels)
                    };
                    config
                },
            )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_every_capability() {
        let perms = MockPermissions::admin();
        assert!(perms.is_admin());
        assert!(perms.has_capability(PUBLISH_CAPABILITY));
        assert!(perms.has_capability("anything"));
    }

    #[test]
    fn test_editor_holds_nothing_until_granted() {
        let perms = MockPermissions::editor();
        assert!(!perms.is_admin());
        assert!(!perms.has_capability(PUBLISH_CAPABILITY));

        let perms = MockPermissions::publisher();
        assert!(!perms.is_admin());
        assert!(perms.has_capability(PUBLISH_CAPABILITY));
        assert!(!perms.has_capability("delete"));
    }

    #[test]
    fn test_default_channel_registry_order() {
        let registry = StaticChannelRegistry::default_channels();
        let ids: Vec<String> = registry.list_channels().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["email", "sms", "push"]);
    }

    #[test]
    fn test_saved_config_is_persisted_and_clean() {
        let config = saved_config();
        assert!(!config.is_new());
        assert_eq!(config.client_type, Some(ClientType::Api));
        assert!(contactclient_core::is_json_object_text(
            config.api_payload.as_deref().unwrap()
        ));
        assert_eq!(config.dnc_channel_set(), vec!["email", "sms"]);
    }
}
