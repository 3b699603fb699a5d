//! Selection tree: the engine-owned source of truth for marks and visibility
//!
//! Nodes live in an ordered two-level arena (parents owning children). A
//! composite-id index resolves ids coming back from the presentation layer;
//! when ids collide the first node wins the index, later duplicates are still
//! stored and addressable by [`NodeKey`].

use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::entities::Item;
use crate::domain::value_objects::{CompositeId, Identifier, Mark};

use super::delta::{MarkChange, StateDelta};
use super::identity::{generate_id, RenderPass};

/// Position of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Parent at index `p`
    Parent(usize),
    /// Child `c` of parent `p`
    Child(usize, usize),
}

impl NodeKey {
    /// Index of the parent this key belongs to (itself for a parent)
    pub fn parent_index(&self) -> usize {
        match *self {
            NodeKey::Parent(p) | NodeKey::Child(p, _) => p,
        }
    }

    pub fn is_child(&self) -> bool {
        matches!(self, NodeKey::Child(..))
    }
}

/// A rendered node
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Caller-supplied identifier
    pub id: Identifier,
    /// Display label
    pub label: String,
    /// Composite id used by the presentation layer
    pub composite_id: CompositeId,
    mark: Mark,
    visible: bool,
    /// Child nodes (always empty for children)
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(item: &Item, composite_id: CompositeId) -> Self {
        Self {
            id: item.id.clone(),
            label: item.name.clone(),
            composite_id,
            mark: Mark::Unchecked,
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Mark and visibility state of one control instance
#[derive(Debug, Clone)]
pub struct SelectionTree {
    container_id: String,
    nodes: Vec<TreeNode>,
    index: HashMap<CompositeId, NodeKey>,
    query: Option<String>,
    duplicates: usize,
}

impl SelectionTree {
    /// Build the tree for `items`, starting a fresh render pass
    ///
    /// Children are only materialized when `with_children` is set (tree
    /// modes). Duplicate composite ids are reported but still rendered.
    pub fn build(
        container_id: &str,
        items: &[Item],
        with_children: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut pass = RenderPass::new();
        let mut tree = Self {
            container_id: container_id.to_string(),
            nodes: Vec::with_capacity(items.len()),
            index: HashMap::new(),
            query: None,
            duplicates: 0,
        };

        for (p, item) in items.iter().enumerate() {
            let composite = generate_id(container_id, &item.id, None);
            if pass.validate_id(&composite, sink) {
                tree.index.insert(composite.clone(), NodeKey::Parent(p));
            }
            let mut parent = TreeNode::new(item, composite);

            if with_children {
                for (c, child_item) in item.children.iter().enumerate() {
                    let composite = generate_id(container_id, &item.id, Some(&child_item.id));
                    if pass.validate_id(&composite, sink) {
                        tree.index.insert(composite.clone(), NodeKey::Child(p, c));
                    }
                    if !child_item.children.is_empty() {
                        sink.report(Diagnostic::NestingTooDeep {
                            id: composite.clone(),
                            ignored: child_item.children.len(),
                        });
                    }
                    parent.children.push(TreeNode::new(child_item, composite));
                }
            }

            tree.nodes.push(parent);
        }

        tree.duplicates = pass.duplicate_count();
        tree
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Parent nodes in document order
    pub fn parents(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Child nodes of parent `p` (empty if `p` is out of range)
    pub fn children_of(&self, p: usize) -> &[TreeNode] {
        self.nodes
            .get(p)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Every node key in document order (parent, then its children)
    pub fn keys(&self) -> Vec<NodeKey> {
        let mut keys = Vec::new();
        for (p, parent) in self.nodes.iter().enumerate() {
            keys.push(NodeKey::Parent(p));
            keys.extend((0..parent.children.len()).map(|c| NodeKey::Child(p, c)));
        }
        keys
    }

    pub fn node(&self, key: NodeKey) -> Option<&TreeNode> {
        match key {
            NodeKey::Parent(p) => self.nodes.get(p),
            NodeKey::Child(p, c) => self.nodes.get(p)?.children.get(c),
        }
    }

    fn node_mut(&mut self, key: NodeKey) -> Option<&mut TreeNode> {
        match key {
            NodeKey::Parent(p) => self.nodes.get_mut(p),
            NodeKey::Child(p, c) => self.nodes.get_mut(p)?.children.get_mut(c),
        }
    }

    /// Mark of a node (`Unchecked` for unknown keys)
    pub fn mark(&self, key: NodeKey) -> Mark {
        self.node(key).map(TreeNode::mark).unwrap_or_default()
    }

    /// Visibility of a node (`false` for unknown keys)
    pub fn is_visible(&self, key: NodeKey) -> bool {
        self.node(key).is_some_and(TreeNode::is_visible)
    }

    /// Set a node's mark; returns the change if the mark actually changed
    ///
    /// Children cannot hold `Indeterminate`; such a request is coerced to
    /// `Unchecked`.
    pub fn set_mark(&mut self, key: NodeKey, mark: Mark) -> Option<MarkChange> {
        let mark = if key.is_child() && mark.is_indeterminate() {
            Mark::Unchecked
        } else {
            mark
        };
        let node = self.node_mut(key)?;
        if node.mark == mark {
            return None;
        }
        node.mark = mark;
        Some(MarkChange {
            key,
            id: node.composite_id.clone(),
            mark,
        })
    }

    /// Set a node's visibility; returns true if it changed
    pub fn set_visible(&mut self, key: NodeKey, visible: bool) -> bool {
        match self.node_mut(key) {
            Some(node) if node.visible != visible => {
                node.visible = visible;
                true
            }
            _ => false,
        }
    }

    /// Resolve a composite id coming back from the presentation layer
    pub fn resolve(&self, id: &CompositeId) -> Option<NodeKey> {
        self.index.get(id).copied()
    }

    /// First parent with the given identifier
    pub fn find_parent(&self, id: &Identifier) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }

    /// Every child with the given identifier, in document order
    pub fn find_children(&self, id: &Identifier) -> Vec<NodeKey> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(p, parent)| {
                parent
                    .children
                    .iter()
                    .enumerate()
                    .filter(move |(_, child)| &child.id == id)
                    .map(move |(c, _)| NodeKey::Child(p, c))
            })
            .collect()
    }

    /// Active search query, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True while a non-empty search filter is applied
    pub fn search_active(&self) -> bool {
        self.query.is_some()
    }

    pub(crate) fn set_query(&mut self, query: Option<String>) {
        self.query = query.filter(|q| !q.trim().is_empty());
    }

    /// Reset every mark to `Unchecked`
    pub fn clear_marks(&mut self) -> StateDelta {
        let mut delta = StateDelta::new();
        for key in self.keys() {
            delta.record(self.set_mark(key, Mark::Unchecked));
        }
        delta
    }

    /// Marks of every node in document order
    pub fn snapshot(&self) -> Vec<(NodeKey, Mark)> {
        self.keys().into_iter().map(|k| (k, self.mark(k))).collect()
    }

    /// Net changes relative to an earlier [`snapshot`](Self::snapshot)
    pub fn diff_since(&self, before: &[(NodeKey, Mark)]) -> StateDelta {
        let mut delta = StateDelta::new();
        for &(key, old) in before {
            let Some(node) = self.node(key) else {
                continue;
            };
            if node.mark != old {
                delta.record(Some(MarkChange {
                    key,
                    id: node.composite_id.clone(),
                    mark: node.mark,
                }));
            }
        }
        delta
    }

    /// Duplicate composite ids seen while building
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Number of nodes (parents and children)
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|n| 1 + n.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
