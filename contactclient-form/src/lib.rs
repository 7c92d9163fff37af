//! Contact Client Form - Configuration Form Builder
//!
//! Given a [`ClientConfig`] entity and a caller's permissions, produces an
//! ordered list of field descriptors suitable for rendering by any UI layer,
//! and validates submitted data before persistence.
//!
//! # Key Types
//!
//! - [`ClientFormBuilder`]: the component - `build`, `validate`, `apply`
//! - [`FieldDescriptor`]: one editable attribute, UI-toolkit independent
//! - [`Constraint`]: validation rules attached to descriptors
//! - [`publish_state`]: the publish-toggle decision table
//!
//! Field registration is data: a static table of field specifications
//! consumed by one generic builder loop (see `table.rs`). The component
//! performs no I/O beyond one read-only channel-registry call and holds no
//! shared mutable state.

mod builder;
mod constraint;
mod descriptor;
mod publish;
mod table;
mod validate;

pub use builder::ClientFormBuilder;
pub use constraint::Constraint;
pub use descriptor::{Choice, FieldDescriptor, UiHints};
pub use publish::{publish_state, PublishState};

// Re-export core types for convenience
pub use contactclient_core::{
    Channel, ChannelRegistry, ClientConfig, ClientError, ClientResult, ClientType, FieldError,
    FieldKind, Permissions, ValidationReport, PUBLISH_CAPABILITY,
};
