//! Tri-state propagation between a parent and its children
//!
//! Two directions, each a single bounded pass:
//!
//! - parent → children: a direct toggle pushes the target mark down to every
//!   child in scope and sets the parent to exactly that mark
//! - children → parent: the parent mark is recomputed from the children in
//!   scope (none → unchecked, all → checked, otherwise indeterminate)
//!
//! With [`Scope::VisibleOnly`] a parent whose visible children are all
//! unchecked keeps its mark when a hidden child is still checked. It is
//! never left unchecked in that case: an unchecked parent becomes
//! indeterminate.

use crate::domain::value_objects::{Mark, Scope};

use super::delta::StateDelta;
use super::tree::{NodeKey, SelectionTree};

/// Direct toggle of parent `p` to `target`
pub fn on_parent_toggle(
    tree: &mut SelectionTree,
    p: usize,
    target: bool,
    scope: Scope,
) -> StateDelta {
    let mut delta = StateDelta::new();
    if p >= tree.parents().len() {
        return delta;
    }

    let mark = Mark::from_checked(target);
    let in_scope: Vec<NodeKey> = (0..tree.children_of(p).len())
        .map(|c| NodeKey::Child(p, c))
        .filter(|&key| scope.includes(tree.is_visible(key)))
        .collect();

    for key in in_scope {
        delta.record(tree.set_mark(key, mark));
    }

    let hidden_checked = tree
        .children_of(p)
        .iter()
        .any(|c| !scope.includes(c.is_visible()) && c.mark().is_checked());
    let parent_mark = if !target && hidden_checked {
        Mark::Indeterminate
    } else {
        mark
    };
    delta.record(tree.set_mark(NodeKey::Parent(p), parent_mark));
    delta
}

/// Recompute the mark of parent `p` from its children in `scope`
///
/// Childless parents are toggled independently and never recomputed.
pub fn on_child_toggle(tree: &mut SelectionTree, p: usize, scope: Scope) -> StateDelta {
    let mut delta = StateDelta::new();
    if let Some(mark) = derive_parent_mark(tree, p, scope) {
        delta.record(tree.set_mark(NodeKey::Parent(p), mark));
    }
    delta
}

/// Mark parent `p` should have, or `None` when it must be left unchanged
pub fn derive_parent_mark(tree: &SelectionTree, p: usize, scope: Scope) -> Option<Mark> {
    let children = tree.children_of(p);
    if children.is_empty() {
        return None;
    }

    let mut in_scope = 0usize;
    let mut checked_in_scope = 0usize;
    let mut checked_out_of_scope = 0usize;
    for child in children {
        let checked = child.mark().is_checked();
        if scope.includes(child.is_visible()) {
            in_scope += 1;
            checked_in_scope += usize::from(checked);
        } else {
            checked_out_of_scope += usize::from(checked);
        }
    }

    if checked_in_scope == 0 {
        // Hidden checked children still count globally
        if checked_out_of_scope > 0 {
            return match tree.mark(NodeKey::Parent(p)) {
                Mark::Unchecked => Some(Mark::Indeterminate),
                _ => None,
            };
        }
        Some(Mark::Unchecked)
    } else if checked_in_scope == in_scope {
        Some(Mark::Checked)
    } else {
        Some(Mark::Indeterminate)
    }
}

/// Recompute every parent with `scope`
pub fn recompute_all(tree: &mut SelectionTree, scope: Scope) -> StateDelta {
    let mut delta = StateDelta::new();
    for p in 0..tree.parents().len() {
        delta.merge(on_child_toggle(tree, p, scope));
    }
    delta
}
