//! Selection extraction: reads the current marks into a mode-aware result
//!
//! Extraction never mutates state and is safe to call repeatedly.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Identifier, SelectionMode};

use super::inject::SelectionRequest;
use super::tree::{SelectionTree, TreeNode};

/// `{ id, name }` reference to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: Identifier,
    pub name: String,
}

impl From<&TreeNode> for ItemRef {
    fn from(node: &TreeNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.label.clone(),
        }
    }
}

/// One selected entry
///
/// `parent` is only set in single-tree mode when a child is selected;
/// `children` is only present in multi-tree mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ItemRef>>,
}

impl SelectionItem {
    fn plain(node: &TreeNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.label.clone(),
            parent: None,
            children: None,
        }
    }
}

/// Normalized selection of one control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: SelectionMode,
    pub items: Vec<SelectionItem>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Injection payload that reproduces this selection
    ///
    /// Multi-tree entries list their checked children; a multi-tree entry
    /// without checked children is a parent-only selection and must not pull
    /// its children in when injected.
    pub fn to_request(&self) -> SelectionRequest {
        let mut request = SelectionRequest::default();
        for item in &self.items {
            match (&item.parent, &item.children) {
                (Some(_), _) => request.children.push(item.id.clone()),
                (None, Some(children)) if children.is_empty() => {
                    request.parents_only.push(item.id.clone());
                }
                (None, Some(children)) => {
                    request
                        .children
                        .extend(children.iter().map(|c| c.id.clone()));
                }
                (None, None) => request.parents.push(item.id.clone()),
            }
        }
        request
    }
}

/// Read the current selection of `tree` for `mode`
pub fn get_selection(tree: &SelectionTree, mode: SelectionMode) -> Selection {
    let items = match mode {
        SelectionMode::SingleFlat | SelectionMode::SingleTree => {
            single_selection(tree, mode).into_iter().collect()
        }
        SelectionMode::MultiFlat => tree
            .parents()
            .iter()
            .filter(|p| p.mark().is_checked())
            .map(SelectionItem::plain)
            .collect(),
        SelectionMode::MultiTree => multi_tree_selection(tree),
    };
    Selection { mode, items }
}

/// First checked node in document order
fn single_selection(tree: &SelectionTree, mode: SelectionMode) -> Option<SelectionItem> {
    for parent in tree.parents() {
        if parent.mark().is_checked() {
            return Some(SelectionItem::plain(parent));
        }
        if !mode.is_tree() {
            continue;
        }
        if let Some(child) = parent.children.iter().find(|c| c.mark().is_checked()) {
            let mut item = SelectionItem::plain(child);
            item.parent = Some(ItemRef::from(parent));
            return Some(item);
        }
    }
    None
}

fn multi_tree_selection(tree: &SelectionTree) -> Vec<SelectionItem> {
    tree.parents()
        .iter()
        .filter_map(|parent| {
            let checked: Vec<ItemRef> = parent
                .children
                .iter()
                .filter(|c| c.mark().is_checked())
                .map(ItemRef::from)
                .collect();
            if !parent.mark().is_checked() && checked.is_empty() {
                return None;
            }
            let mut item = SelectionItem::plain(parent);
            item.children = Some(checked);
            Some(item)
        })
        .collect()
}
