//! Search visibility and the parent recalculation that follows it
//!
//! Matching itself belongs to a [`VisibilityFilter`]; the engine only
//! consumes the per-node result and re-derives parent tri-states.

use crate::domain::value_objects::{Scope, SelectionMode};

use super::delta::StateDelta;
use super::propagation::recompute_all;
use super::tree::{NodeKey, SelectionTree};

/// Decides whether a label matches a search query
pub trait VisibilityFilter {
    fn matches(&self, query: &str, label: &str) -> bool;
}

/// Case-insensitive substring match on labels
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl VisibilityFilter for SubstringFilter {
    fn matches(&self, query: &str, label: &str) -> bool {
        label.to_lowercase().contains(&query.trim().to_lowercase())
    }
}

/// Apply a new search query and recalculate parent marks
///
/// A blank query clears the filter and restores full visibility. A parent is
/// visible if it or any of its children match; a child is visible if it or
/// its parent matches.
pub fn apply_query(
    tree: &mut SelectionTree,
    mode: SelectionMode,
    filter: &dyn VisibilityFilter,
    query: &str,
) -> StateDelta {
    let query = query.trim();
    tree.set_query(Some(query.to_string()));

    let mut visibility_changed = false;
    for p in 0..tree.parents().len() {
        let (parent_visible, child_visibility) = if query.is_empty() {
            (true, vec![true; tree.children_of(p).len()])
        } else {
            let parent_matches = filter.matches(query, &tree.parents()[p].label);
            let children: Vec<bool> = tree
                .children_of(p)
                .iter()
                .map(|c| parent_matches || filter.matches(query, &c.label))
                .collect();
            (parent_matches || children.contains(&true), children)
        };

        visibility_changed |= tree.set_visible(NodeKey::Parent(p), parent_visible);
        for (c, visible) in child_visibility.into_iter().enumerate() {
            visibility_changed |= tree.set_visible(NodeKey::Child(p, c), visible);
        }
    }

    let mut delta = recalculate(tree, mode);
    delta.visibility_changed |= visibility_changed;
    delta
}

/// Re-derive parent marks after visibility changed
///
/// Uses the full scope once the filter is cleared and the visible scope
/// while searching; in the latter case a parent never flips to unchecked
/// while it still has hidden checked children. Single and flat modes have no
/// derived parents and are left alone.
pub fn recalculate(tree: &mut SelectionTree, mode: SelectionMode) -> StateDelta {
    if !mode.propagates() {
        return StateDelta::new();
    }
    let scope = Scope::for_search(tree.search_active());
    recompute_all(tree, scope)
}
