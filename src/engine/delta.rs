//! State deltas returned by every mutating engine operation
//!
//! A host applies the delta to its presentation layer once per operation
//! instead of reacting to nested callbacks.

use serde::Serialize;

use crate::domain::value_objects::{CompositeId, Mark};

use super::tree::NodeKey;

/// A single mark that changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkChange {
    #[serde(skip)]
    pub key: NodeKey,
    pub id: CompositeId,
    pub mark: Mark,
}

/// Everything one operation changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateDelta {
    /// Changed marks in application order; a node appears at most once
    pub changes: Vec<MarkChange>,
    /// True if any node's visibility changed
    pub visibility_changed: bool,
}

impl StateDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change, keeping only the latest mark per node
    pub fn record(&mut self, change: Option<MarkChange>) {
        let Some(change) = change else {
            return;
        };
        match self.changes.iter_mut().find(|c| c.key == change.key) {
            Some(existing) => existing.mark = change.mark,
            None => self.changes.push(change),
        }
    }

    /// Fold another delta into this one
    pub fn merge(&mut self, other: StateDelta) {
        self.visibility_changed |= other.visibility_changed;
        for change in other.changes {
            self.record(Some(change));
        }
    }

    /// Returns true if nothing changed
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && !self.visibility_changed
    }

    /// True when the selection summary needs to be refreshed
    pub fn summary_dirty(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Final mark recorded for a node, if it changed
    pub fn mark_of(&self, id: &CompositeId) -> Option<Mark> {
        self.changes.iter().find(|c| &c.id == id).map(|c| c.mark)
    }
}
