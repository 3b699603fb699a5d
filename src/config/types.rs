//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::entities::Item;
use crate::domain::value_objects::SelectionMode;
use crate::error::TreeSelectResult;

use super::loader::{self, ConfigWarning};

/// Placeholder shown when nothing is selected
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Capability flags a control understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Search,
    MultiSelect,
    TreeView,
    SelectAllBtn,
    ClearAllBtn,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::Search,
        Flag::MultiSelect,
        Flag::TreeView,
        Flag::SelectAllBtn,
        Flag::ClearAllBtn,
    ];

    /// Canonical (snake_case) key
    pub fn key(&self) -> &'static str {
        match self {
            Flag::Search => "search",
            Flag::MultiSelect => "multi_select",
            Flag::TreeView => "tree_view",
            Flag::SelectAllBtn => "select_all_btn",
            Flag::ClearAllBtn => "clear_all_btn",
        }
    }

    /// camelCase alias accepted on input
    pub fn camel_key(&self) -> &'static str {
        match self {
            Flag::Search => "search",
            Flag::MultiSelect => "multiSelect",
            Flag::TreeView => "treeView",
            Flag::SelectAllBtn => "selectAllBtn",
            Flag::ClearAllBtn => "clearAllBtn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Flag::ALL
            .into_iter()
            .find(|f| f.key() == key || f.camel_key() == key)
    }
}

/// Resolved capability flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub search: bool,
    pub multi_select: bool,
    pub tree_view: bool,
    pub select_all_btn: bool,
    pub clear_all_btn: bool,
}

impl Flags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Search => self.search,
            Flag::MultiSelect => self.multi_select,
            Flag::TreeView => self.tree_view,
            Flag::SelectAllBtn => self.select_all_btn,
            Flag::ClearAllBtn => self.clear_all_btn,
        }
    }

    fn set(&mut self, flag: Flag, enabled: bool) {
        match flag {
            Flag::Search => self.search = enabled,
            Flag::MultiSelect => self.multi_select = enabled,
            Flag::TreeView => self.tree_view = enabled,
            Flag::SelectAllBtn => self.select_all_btn = enabled,
            Flag::ClearAllBtn => self.clear_all_btn = enabled,
        }
    }

    /// Selection mode implied by the multi-select and tree-view flags
    pub fn mode(&self) -> SelectionMode {
        SelectionMode::from_flags(self.multi_select, self.tree_view)
    }
}

/// Configuration of one control instance
///
/// ```toml
/// container_id = "categories"
/// placeholder = "Pick categories"
///
/// [flags]
/// multi_select = { enabled = true }
/// tree_view = { enabled = true }
///
/// [[data]]
/// id = 1
/// name = "Fruit"
/// children = [{ id = 11, name = "Apple" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    #[serde(default, alias = "containerId")]
    pub container_id: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub data: Vec<Item>,

    /// Raw flag table; resolved leniently by [`ControlConfig::resolve_flags`]
    #[serde(default)]
    pub flags: BTreeMap<String, Value>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            container_id: String::new(),
            placeholder: default_placeholder(),
            data: Vec::new(),
            flags: BTreeMap::new(),
        }
    }
}

impl ControlConfig {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Self::default()
        }
    }

    /// Builder: replace the item data
    pub fn with_data(mut self, data: Vec<Item>) -> Self {
        self.data = data;
        self
    }

    /// Builder: set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Builder: enable or disable a flag
    pub fn with_flag(mut self, flag: Flag, enabled: bool) -> Self {
        self.flags
            .insert(flag.key().to_string(), serde_json::json!({ "enabled": enabled }));
        self
    }

    /// Load a config file (TOML or JSON by extension)
    pub fn load(path: &Path) -> TreeSelectResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load a config file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Trimmed container id, or `None` if it is blank
    pub fn container(&self) -> Option<&str> {
        let id = self.container_id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// Resolve the raw flag table
    ///
    /// Each flag must be `{ enabled = <bool> }`. Anything else disables the
    /// flag and is reported; unknown flag names are reported and ignored.
    pub fn resolve_flags(&self, sink: &mut dyn DiagnosticSink) -> Flags {
        let mut flags = Flags::default();
        for (key, value) in &self.flags {
            let Some(flag) = Flag::from_key(key) else {
                sink.report(Diagnostic::UnknownFlag { flag: key.clone() });
                continue;
            };
            match value.get("enabled").and_then(Value::as_bool) {
                Some(enabled) => flags.set(flag, enabled),
                None => {
                    sink.report(Diagnostic::InvalidFlag {
                        flag: key.clone(),
                        value: value.to_string(),
                    });
                    flags.set(flag, false);
                }
            }
        }
        flags
    }
}
