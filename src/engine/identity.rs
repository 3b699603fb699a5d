//! Node identity resolution
//!
//! Every rendered node gets a composite id. Uniqueness is checked per render
//! pass: a [`RenderPass`] is created when a tree is (re)built and dropped
//! afterwards, so nothing leaks between control instances.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::value_objects::{CompositeId, Identifier};

/// Derive the composite id for a parent (`child_id == None`) or a child
pub fn generate_id(
    container_id: &str,
    parent_id: &Identifier,
    child_id: Option<&Identifier>,
) -> CompositeId {
    CompositeId::new(container_id, parent_id, child_id)
}

/// Per-render uniqueness tracker
#[derive(Debug, Default)]
pub struct RenderPass {
    seen: HashSet<CompositeId>,
    duplicates: usize,
}

impl RenderPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`; returns false (and reports) if it was already seen in this pass
    ///
    /// Every repeat is reported, not only the first one. A duplicate does not
    /// stop the node from being rendered.
    pub fn validate_id(&mut self, id: &CompositeId, sink: &mut dyn DiagnosticSink) -> bool {
        if self.seen.insert(id.clone()) {
            return true;
        }
        self.duplicates += 1;
        sink.report(Diagnostic::DuplicateId { id: id.clone() });
        false
    }

    /// Number of duplicate ids observed so far
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}
