//! The form builder

use crate::descriptor::FieldDescriptor;
use crate::table::{BuildContext, FIELD_SPECS};
use crate::validate::{validate_submission, write_submission};
use contactclient_core::{
    ChannelRegistry, ClientConfig, ClientError, ClientResult, Permissions, ValidationReport,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Builds field descriptors and validates submissions for one caller.
///
/// Pure computation over its inputs plus one read-only call to the channel
/// registry per operation; safe to share across threads and call
/// concurrently.
pub struct ClientFormBuilder<'a, P: Permissions, R: ChannelRegistry> {
    permissions: &'a P,
    registry: &'a R,
}

impl<'a, P: Permissions, R: ChannelRegistry> ClientFormBuilder<'a, P, R> {
    pub fn new(permissions: &'a P, registry: &'a R) -> Self {
        Self {
            permissions,
            registry,
        }
    }

    fn context<'c>(&self, config: &'c ClientConfig) -> BuildContext<'c> {
        BuildContext::new(config, self.permissions, self.registry)
    }

    /// Produce the ordered descriptor list for rendering.
    ///
    /// Never fails: defaults are computed defensively (out-of-range spreads
    /// arrive clamped, unparseable state degrades to safe values).
    pub fn build(&self, config: &ClientConfig) -> Vec<FieldDescriptor> {
        let ctx = self.context(config);
        let descriptors: Vec<FieldDescriptor> = FIELD_SPECS
            .iter()
            .map(|spec| FieldDescriptor {
                name: spec.name,
                kind: spec.kind,
                required: spec.required,
                read_only: (spec.read_only)(&ctx),
                default: (spec.default)(&ctx),
                constraints: spec.constraints.to_vec(),
                choices: (spec.choices)(&ctx),
                ui_hints: spec.ui,
            })
            .collect();
        debug!(fields = descriptors.len(), "built client form descriptors");
        descriptors
    }

    /// Validate a submission, collecting every failure.
    ///
    /// Range-constrained values are not rejected here - they are clamped on
    /// write, matching the clamp applied to displayed defaults.
    pub fn validate(
        &self,
        config: &ClientConfig,
        submitted: &Map<String, Value>,
    ) -> ValidationReport {
        let ctx = self.context(config);
        let report = validate_submission(&ctx, submitted, false);
        debug!(errors = report.len(), "validated client form submission");
        report
    }

    /// Validate a submission, additionally reporting `OutOfRange` for
    /// range-constrained values instead of relying on the write-time clamp.
    pub fn validate_strict(
        &self,
        config: &ClientConfig,
        submitted: &Map<String, Value>,
    ) -> ValidationReport {
        let ctx = self.context(config);
        validate_submission(&ctx, submitted, true)
    }

    /// Validate and, on success, write the submission onto the entity.
    ///
    /// All-or-nothing: any validation error rejects the whole submission.
    /// A forbidden mutation in particular can never be skipped around.
    pub fn apply(
        &self,
        config: &mut ClientConfig,
        submitted: &Map<String, Value>,
    ) -> ClientResult<()> {
        let report = self.validate(config, submitted);
        if !report.is_valid() {
            debug!(errors = report.len(), "rejected client config submission");
            return Err(ClientError::Validation(report));
        }
        write_submission(config, submitted);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
