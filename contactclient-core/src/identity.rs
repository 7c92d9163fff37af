//! Identity types for contact client entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Client identifier using UUIDv7 for timestamp-sortable IDs.
/// A `ClientConfig` without an id has never been persisted.
pub type ClientId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 ClientId (timestamp-sortable).
pub fn new_client_id() -> ClientId {
    Uuid::now_v7()
}
