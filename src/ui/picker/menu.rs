//! Picker state and action handling.
//!
//! The picker owns a [`SelectControl`] and only keeps view state of its own
//! (cursor, expanded parents, search input). Every mark change goes through
//! the control's event pipeline.

use std::collections::HashSet;

use treeselect::{ControlEvent, Mark, NodeKey, Selection, SelectControl};

use super::render::{render_help_bar, render_row, render_search_bar, render_status_bar};

/// One visible line of the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: NodeKey,
    /// 0 for parents, 1 for children
    pub depth: usize,
    pub label: String,
    pub mark: Mark,
    pub has_children: bool,
    pub expanded: bool,
}

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Up,
    Down,
    Toggle,
    Expand,
    Collapse,
    SelectAll,
    SelectNone,
    Invert,
    /// Enter search input mode
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search input mode keeping the filter
    EndSearch,
    /// Leave search input mode and clear the filter
    CancelSearch,
    Confirm,
    Quit,
}

/// Interactive picker over one control
pub struct Picker {
    control: SelectControl,
    cursor: usize,
    expanded: HashSet<usize>,
    rows: Vec<Row>,
    searching: bool,
    query: String,
    notice: Option<String>,
}

impl Picker {
    pub fn new(control: SelectControl) -> Self {
        let mut picker = Self {
            control,
            cursor: 0,
            expanded: HashSet::new(),
            rows: Vec::new(),
            searching: false,
            query: String::new(),
            notice: None,
        };
        picker.rebuild_rows();
        picker
    }

    /// Rebuild the visible rows from the control's tree
    pub fn rebuild_rows(&mut self) {
        let tree = self.control.tree();
        let filtering = tree.search_active();
        let mut rows = Vec::new();

        for (p, parent) in tree.parents().iter().enumerate() {
            if !parent.is_visible() {
                continue;
            }
            let has_children = !parent.children.is_empty();
            // Matches are easier to see with their parents opened
            let expanded = has_children && (filtering || self.expanded.contains(&p));
            rows.push(Row {
                key: NodeKey::Parent(p),
                depth: 0,
                label: parent.label.clone(),
                mark: parent.mark(),
                has_children,
                expanded,
            });

            if !expanded {
                continue;
            }
            for (c, child) in parent.children.iter().enumerate() {
                if child.is_visible() {
                    rows.push(Row {
                        key: NodeKey::Child(p, c),
                        depth: 1,
                        label: child.label.clone(),
                        mark: child.mark(),
                        has_children: false,
                        expanded: false,
                    });
                }
            }
        }

        self.rows = rows;
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Most recent diagnostic, shown under the status bar
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn control(&self) -> &SelectControl {
        &self.control
    }

    pub fn into_control(self) -> SelectControl {
        self.control
    }

    pub fn selection(&self) -> Selection {
        self.control.selection()
    }

    /// Handle an action; returns `true` when the picker is done
    pub fn handle_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            PickerAction::Toggle => {
                if let Some(row) = self.rows.get(self.cursor) {
                    let Some(node) = self.control.tree().node(row.key) else {
                        return false;
                    };
                    let id = node.composite_id.clone();
                    let event = if row.key.is_child() {
                        ControlEvent::ChildToggled(id)
                    } else {
                        ControlEvent::ParentToggled(id)
                    };
                    self.dispatch(event);
                }
                false
            }
            PickerAction::Expand => {
                if let Some(Row {
                    key: NodeKey::Parent(p),
                    has_children: true,
                    ..
                }) = self.rows.get(self.cursor)
                {
                    self.expanded.insert(*p);
                    self.rebuild_rows();
                }
                false
            }
            PickerAction::Collapse => {
                if let Some(row) = self.rows.get(self.cursor) {
                    let p = row.key.parent_index();
                    self.expanded.remove(&p);
                    self.rebuild_rows();
                    if let Some(pos) = self.rows.iter().position(|r| r.key == NodeKey::Parent(p)) {
                        self.cursor = pos;
                    }
                }
                false
            }
            PickerAction::SelectAll | PickerAction::SelectNone => {
                self.dispatch(ControlEvent::BulkRequested {
                    select: action == PickerAction::SelectAll,
                    respect_search: true,
                });
                false
            }
            PickerAction::Invert => {
                self.control.invert(true);
                self.refresh();
                false
            }
            PickerAction::StartSearch => {
                self.searching = self.control.flags().search;
                self.dispatch(ControlEvent::SearchChanged(self.query.clone()));
                false
            }
            PickerAction::SearchInput(c) => {
                self.query.push(c);
                self.dispatch(ControlEvent::SearchChanged(self.query.clone()));
                false
            }
            PickerAction::SearchBackspace => {
                self.query.pop();
                self.dispatch(ControlEvent::SearchChanged(self.query.clone()));
                false
            }
            PickerAction::EndSearch => {
                self.searching = false;
                false
            }
            PickerAction::CancelSearch => {
                self.searching = false;
                self.query.clear();
                self.dispatch(ControlEvent::SearchChanged(String::new()));
                false
            }
            PickerAction::Confirm | PickerAction::Quit => true,
        }
    }

    fn dispatch(&mut self, event: ControlEvent) {
        self.control.apply_event(event);
        self.refresh();
    }

    fn refresh(&mut self) {
        if let Some(last) = self.control.drain_diagnostics().last() {
            self.notice = Some(last.to_string());
        }
        self.rebuild_rows();
    }

    /// Render the rows to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&render_row(row, i == self.cursor, supports_unicode));
            out.push('\n');
        }

        out
    }

    /// Render the search input line, if any
    pub fn render_search_bar(&self, supports_unicode: bool) -> Option<String> {
        if !self.searching && self.query.is_empty() {
            return None;
        }
        Some(render_search_bar(&self.query, self.searching, supports_unicode))
    }

    pub fn render_status_bar(&self, supports_unicode: bool, width: usize) -> String {
        let summary = self.control.summary(Some(width.saturating_sub(10)));
        render_status_bar(&summary, supports_unicode)
    }

    pub fn render_help_bar(&self) -> String {
        let flags = self.control.flags();
        render_help_bar(self.control.mode().is_multi(), flags.search, self.searching)
    }
}
