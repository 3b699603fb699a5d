//! One selection control instance
//!
//! `SelectControl` owns the tree, the fixed selection mode and the
//! diagnostics of a single container. User actions arrive as
//! [`ControlEvent`]s and are applied as one ordered pipeline step returning a
//! [`StateDelta`] for the host to reflect.

use std::path::Path;

use crate::config::{ConfigWarning, ControlConfig, Flags};
use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
use crate::domain::value_objects::{CompositeId, Mark, Scope, SelectionMode};
use crate::engine::{
    self, NodeKey, Selection, SelectionRequest, SelectionTree, StateDelta, SubstringFilter,
    VisibilityFilter,
};
use crate::error::{TreeSelectError, TreeSelectResult};

/// An action reported by the event-wiring layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// A child node's checkbox/radio was toggled
    ChildToggled(CompositeId),
    /// A parent node's checkbox/radio was toggled
    ParentToggled(CompositeId),
    /// The select-all (`select == true`) or clear-all button was pressed
    BulkRequested { select: bool, respect_search: bool },
    /// The search text changed (empty clears the filter)
    SearchChanged(String),
}

/// A configured selection control
pub struct SelectControl {
    container_id: String,
    placeholder: String,
    flags: Flags,
    mode: SelectionMode,
    tree: SelectionTree,
    filter: Box<dyn VisibilityFilter>,
    diagnostics: Diagnostics,
}

impl std::fmt::Debug for SelectControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectControl")
            .field("container_id", &self.container_id)
            .field("mode", &self.mode)
            .field("flags", &self.flags)
            .field("nodes", &self.tree.len())
            .field("duplicates", &self.tree.duplicate_count())
            .finish()
    }
}

impl SelectControl {
    /// Build a control from `config`
    ///
    /// Returns `None` (after reporting) when the container id is missing.
    /// Flag problems and duplicate ids are reported but do not prevent
    /// creation; they end up in this control's diagnostics.
    pub fn new(config: &ControlConfig, sink: &mut dyn DiagnosticSink) -> Option<Self> {
        let Some(container_id) = config.container() else {
            sink.report(Diagnostic::MissingContainerId);
            return None;
        };

        let mut diagnostics = Diagnostics::new();
        let flags = config.resolve_flags(&mut diagnostics);
        let mode = flags.mode();
        let tree = SelectionTree::build(container_id, &config.data, mode.is_tree(), &mut diagnostics);

        Some(Self {
            container_id: container_id.to_string(),
            placeholder: config.placeholder.clone(),
            flags,
            mode,
            tree,
            filter: Box::new(SubstringFilter),
            diagnostics,
        })
    }

    /// Load a config file and build the control it describes
    pub fn from_file(path: &Path) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = ControlConfig::load_with_warnings(path)?;
        let mut sink = Diagnostics::new();
        let control = Self::new(&config, &mut sink).ok_or_else(|| {
            TreeSelectError::MissingContainerId {
                file: path.to_path_buf(),
            }
        })?;
        Ok((control, warnings))
    }

    /// Builder: swap the search matcher
    pub fn with_filter(mut self, filter: impl VisibilityFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Read-only view of marks and visibility for the presentation layer
    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }

    /// Current selection (never mutates state)
    pub fn selection(&self) -> Selection {
        engine::get_selection(&self.tree, self.mode)
    }

    /// Replace the selection with the given ids
    pub fn set_selection(&mut self, request: &SelectionRequest) -> StateDelta {
        engine::apply_selection(&mut self.tree, self.mode, request, &mut self.diagnostics)
    }

    /// Select or clear every node in scope
    ///
    /// Selecting everything is refused in single modes; clearing is always
    /// allowed.
    pub fn toggle_all(&mut self, select: bool, respect_search: bool) -> StateDelta {
        if select && !self.mode.is_multi() {
            self.diagnostics
                .report(Diagnostic::BulkUnavailable { mode: self.mode });
            return StateDelta::new();
        }
        engine::toggle_all(&mut self.tree, self.mode, select, respect_search)
    }

    /// Invert the selection of every leaf in scope (multi modes only)
    pub fn invert(&mut self, respect_search: bool) -> StateDelta {
        if !self.mode.is_multi() {
            self.diagnostics
                .report(Diagnostic::BulkUnavailable { mode: self.mode });
            return StateDelta::new();
        }
        engine::invert(&mut self.tree, self.mode, respect_search)
    }

    /// Apply a search query (requires the search flag)
    pub fn search(&mut self, query: &str) -> StateDelta {
        if !self.flags.search {
            self.diagnostics.report(Diagnostic::SearchUnavailable {
                container_id: self.container_id.clone(),
            });
            return StateDelta::new();
        }
        engine::apply_query(&mut self.tree, self.mode, self.filter.as_ref(), query)
    }

    /// Set one node's visibility directly (hosts with their own matcher)
    ///
    /// Call [`recalculate`](Self::recalculate) once all visibility updates
    /// of a search step are applied.
    pub fn set_visible(&mut self, id: &CompositeId, visible: bool) -> bool {
        match self.resolve(id) {
            Some(key) => self.tree.set_visible(key, visible),
            None => false,
        }
    }

    /// Mark the filter as active (`Some`) or cleared (`None`) and recompute parents
    pub fn recalculate(&mut self, query: Option<&str>) -> StateDelta {
        self.tree.set_query(query.map(str::to_string));
        if self.tree.query().is_none() {
            for key in self.tree.keys() {
                self.tree.set_visible(key, true);
            }
        }
        engine::recalculate(&mut self.tree, self.mode)
    }

    /// Summary line for a header/preview
    pub fn summary(&self, max_width: Option<usize>) -> String {
        engine::summarize(&self.selection(), &self.placeholder, max_width)
    }

    /// Mark of a node by composite id
    pub fn mark(&self, id: &CompositeId) -> Option<Mark> {
        self.tree.resolve(id).map(|key| self.tree.mark(key))
    }

    /// Apply one user action
    pub fn apply_event(&mut self, event: ControlEvent) -> StateDelta {
        match event {
            ControlEvent::ChildToggled(id) | ControlEvent::ParentToggled(id) => {
                match self.resolve(&id) {
                    Some(key) => self.toggle_node(key),
                    None => StateDelta::new(),
                }
            }
            ControlEvent::BulkRequested {
                select,
                respect_search,
            } => {
                let enabled = if select {
                    self.flags.select_all_btn
                } else {
                    self.flags.clear_all_btn
                };
                if !enabled {
                    self.diagnostics
                        .report(Diagnostic::BulkUnavailable { mode: self.mode });
                    return StateDelta::new();
                }
                self.toggle_all(select, respect_search)
            }
            ControlEvent::SearchChanged(query) => self.search(&query),
        }
    }

    fn resolve(&mut self, id: &CompositeId) -> Option<NodeKey> {
        let key = self.tree.resolve(id);
        if key.is_none() {
            self.diagnostics
                .report(Diagnostic::UnknownNode { id: id.clone() });
        }
        key
    }

    /// Toggle one node according to the mode
    pub fn toggle_node(&mut self, key: NodeKey) -> StateDelta {
        if self.tree.node(key).is_none() {
            return StateDelta::new();
        }
        let scope = Scope::for_search(self.tree.search_active());

        match (self.mode, key) {
            (SelectionMode::SingleFlat | SelectionMode::SingleTree, _) => self.toggle_single(key),
            (SelectionMode::MultiFlat, _) => {
                let target = Mark::from_checked(!self.tree.mark(key).is_checked());
                let mut delta = StateDelta::new();
                delta.record(self.tree.set_mark(key, target));
                delta
            }
            (SelectionMode::MultiTree, NodeKey::Parent(p)) => {
                let target = !self.tree.mark(key).is_checked();
                engine::on_parent_toggle(&mut self.tree, p, target, scope)
            }
            (SelectionMode::MultiTree, NodeKey::Child(p, _)) => {
                let target = Mark::from_checked(!self.tree.mark(key).is_checked());
                let mut delta = StateDelta::new();
                delta.record(self.tree.set_mark(key, target));
                delta.merge(engine::on_child_toggle(&mut self.tree, p, scope));
                delta
            }
        }
    }

    /// Radio semantics: select the node alone, or clear it if it was selected
    fn toggle_single(&mut self, key: NodeKey) -> StateDelta {
        let was_checked = self.tree.mark(key).is_checked();
        let before = self.tree.snapshot();
        self.tree.clear_marks();
        if !was_checked {
            self.tree.set_mark(key, Mark::Checked);
        }
        self.tree.diff_since(&before)
    }
}
