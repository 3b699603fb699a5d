//! Selection injection: applies a caller-supplied id set onto the marks
//!
//! Injection always starts from a cleared tree, so applying the same request
//! twice yields the same state. Ids that are not in the tree are reported
//! and skipped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSink, NodeLevel};
use crate::domain::value_objects::{Identifier, Mark, Scope, SelectionMode};
use crate::error::TreeSelectResult;

use super::delta::StateDelta;
use super::propagation::{on_child_toggle, on_parent_toggle};
use super::tree::{NodeKey, SelectionTree};

/// Ids to select, split by tree level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub parents: Vec<Identifier>,
    #[serde(default)]
    pub children: Vec<Identifier>,
    /// Parents checked on their own, without checking their children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents_only: Vec<Identifier>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add parent ids
    pub fn with_parents<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.parents.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Builder: add child ids
    pub fn with_children<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.children.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Builder: add parent ids that keep their children untouched
    pub fn with_parents_only<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.parents_only.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Parse a `{ "parents": [...], "children": [...] }` payload
    pub fn from_json(text: &str) -> TreeSelectResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.children.is_empty() && self.parents_only.is_empty()
    }
}

/// Replace the current selection with `request`
///
/// Returns the net mark changes.
pub fn apply_selection(
    tree: &mut SelectionTree,
    mode: SelectionMode,
    request: &SelectionRequest,
    sink: &mut dyn DiagnosticSink,
) -> StateDelta {
    let before = tree.snapshot();
    tree.clear_marks();

    if mode.is_multi() {
        apply_multi(tree, mode, request, sink);
    } else {
        apply_single(tree, mode, request, sink);
    }

    tree.diff_since(&before)
}

fn matching_parents(tree: &SelectionTree, id: &Identifier) -> Vec<usize> {
    tree.parents()
        .iter()
        .enumerate()
        .filter(|(_, p)| &p.id == id)
        .map(|(p, _)| p)
        .collect()
}

fn apply_multi(
    tree: &mut SelectionTree,
    mode: SelectionMode,
    request: &SelectionRequest,
    sink: &mut dyn DiagnosticSink,
) {
    let mut affected = BTreeSet::new();

    for id in &request.parents {
        let matches = matching_parents(tree, id);
        if matches.is_empty() {
            sink.report(Diagnostic::UnknownId {
                level: NodeLevel::Parent,
                id: id.clone(),
            });
        }
        for p in matches {
            if mode.propagates() {
                on_parent_toggle(tree, p, true, Scope::All);
            } else {
                tree.set_mark(NodeKey::Parent(p), Mark::Checked);
            }
        }
    }

    for id in &request.children {
        let matches = tree.find_children(id);
        if matches.is_empty() {
            sink.report(Diagnostic::UnknownId {
                level: NodeLevel::Child,
                id: id.clone(),
            });
        }
        for key in matches {
            tree.set_mark(key, Mark::Checked);
            affected.insert(key.parent_index());
        }
    }

    if mode.propagates() {
        for p in affected {
            on_child_toggle(tree, p, Scope::All);
        }
    }

    for id in &request.parents_only {
        let matches = matching_parents(tree, id);
        if matches.is_empty() {
            sink.report(Diagnostic::UnknownId {
                level: NodeLevel::Parent,
                id: id.clone(),
            });
        }
        for p in matches {
            tree.set_mark(NodeKey::Parent(p), Mark::Checked);
        }
    }
}

/// A parent id wins over a child id; only the first id of a level is used
fn apply_single(
    tree: &mut SelectionTree,
    mode: SelectionMode,
    request: &SelectionRequest,
    sink: &mut dyn DiagnosticSink,
) {
    if let Some(id) = request.parents.iter().chain(&request.parents_only).next() {
        match tree.find_parent(id) {
            Some(p) => {
                tree.set_mark(NodeKey::Parent(p), Mark::Checked);
            }
            None => sink.report(Diagnostic::UnknownId {
                level: NodeLevel::Parent,
                id: id.clone(),
            }),
        }
        return;
    }

    if let Some(id) = request.children.first() {
        let first = if mode.is_tree() {
            tree.find_children(id).into_iter().next()
        } else {
            None
        };
        match first {
            Some(key) => {
                tree.set_mark(key, Mark::Checked);
            }
            None => sink.report(Diagnostic::UnknownId {
                level: NodeLevel::Child,
                id: id.clone(),
            }),
        }
    }
}
