//! Collaborator traits consumed by the form builder
//!
//! The builder is pure computation over its inputs plus one read-only call to
//! the channel registry. Both collaborators are traits so any surrounding
//! application (or test harness) can supply its own implementation.

use serde::{Deserialize, Serialize};

/// Capability name gating publish-state edits.
pub const PUBLISH_CAPABILITY: &str = "publish";

/// Caller permission checks.
pub trait Permissions {
    /// Administrators may edit fields ordinary editors only see.
    fn is_admin(&self) -> bool;

    /// Check a named capability grant, e.g. [`PUBLISH_CAPABILITY`].
    fn has_capability(&self, name: &str) -> bool;
}

/// One communication channel a contact can opt out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Channel {
    /// Stable identifier stored on the entity (e.g. `email`).
    pub id: String,
    /// Human-readable label for rendering.
    pub label: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Read-only registry of available communication channels.
///
/// Populates the do-not-contact multi-choice; the order returned is the
/// order presented.
pub trait ChannelRegistry {
    fn list_channels(&self) -> Vec<Channel>;
}
