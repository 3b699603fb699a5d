//! Bulk select/clear (and invert) over the nodes in scope
//!
//! When the caller asks to respect the search and a filter is active, only
//! visible nodes are touched. Parents are recomputed afterwards in
//! multi-tree mode so partially restricted bulk actions still leave valid
//! tri-states.

use crate::domain::value_objects::{Mark, Scope, SelectionMode};

use super::delta::StateDelta;
use super::propagation::{on_child_toggle, on_parent_toggle};
use super::tree::{NodeKey, SelectionTree};

fn restriction(tree: &SelectionTree, respect_search: bool) -> Scope {
    Scope::for_search(respect_search && tree.search_active())
}

/// Select (`select == true`) or clear every node in scope
///
/// Clearing also clears indeterminate parents. In multi-tree mode a parent
/// in scope is toggled like a direct parent toggle, so it is never left
/// unchecked while a hidden child is still checked.
pub fn toggle_all(
    tree: &mut SelectionTree,
    mode: SelectionMode,
    select: bool,
    respect_search: bool,
) -> StateDelta {
    let scope = restriction(tree, respect_search);
    let target = Mark::from_checked(select);
    let mut delta = StateDelta::new();

    for p in 0..tree.parents().len() {
        let mut touched = false;
        let derived = mode.propagates() && !tree.children_of(p).is_empty();
        let parent = NodeKey::Parent(p);
        let parent_in_scope = scope.includes(tree.is_visible(parent));

        if derived && parent_in_scope {
            delta.merge(on_parent_toggle(tree, p, select, scope));
            continue;
        }

        if !derived && parent_in_scope {
            let change = tree.set_mark(parent, target);
            touched |= change.is_some();
            delta.record(change);
        }

        if mode.is_tree() {
            for c in 0..tree.children_of(p).len() {
                let key = NodeKey::Child(p, c);
                if scope.includes(tree.is_visible(key)) {
                    let change = tree.set_mark(key, target);
                    touched |= change.is_some();
                    delta.record(change);
                }
            }
        }

        if touched && derived {
            delta.merge(on_child_toggle(tree, p, scope));
        }
    }

    delta
}

/// Flip every leaf in scope, then recompute parents
///
/// Leaves are children and childless parents; a parent with children only
/// follows its children.
pub fn invert(tree: &mut SelectionTree, mode: SelectionMode, respect_search: bool) -> StateDelta {
    let scope = restriction(tree, respect_search);
    let mut delta = StateDelta::new();

    for p in 0..tree.parents().len() {
        let child_count = tree.children_of(p).len();
        let leaf_keys: Vec<NodeKey> = if child_count == 0 {
            vec![NodeKey::Parent(p)]
        } else {
            (0..child_count).map(|c| NodeKey::Child(p, c)).collect()
        };

        for key in leaf_keys {
            if scope.includes(tree.is_visible(key)) {
                let flipped = Mark::from_checked(!tree.mark(key).is_checked());
                delta.record(tree.set_mark(key, flipped));
            }
        }

        if child_count > 0 && mode.propagates() {
            delta.merge(on_child_toggle(tree, p, scope));
        }
    }

    delta
}
