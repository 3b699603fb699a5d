//! Item entity - one labeled entry of the selection tree
//!
//! Items form a two-level tree: parents with optional children. Deeper
//! nesting is accepted on input but ignored when the tree is built.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Identifier;

/// A labeled item supplied by the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-supplied identifier (string or integer)
    pub id: Identifier,
    /// Display label
    pub name: String,
    /// Child items (empty for leaf parents)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

impl Item {
    /// Create an item without children
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder: attach a child item
    pub fn with_child(mut self, child: Item) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: attach several child items
    pub fn with_children(mut self, children: impl IntoIterator<Item = Item>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns true if this item has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
