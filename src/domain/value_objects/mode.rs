//! Selection mode value object
//!
//! The four display modes are derived from two independent capabilities
//! (multi-select and tree view) once, when a control is created.

use serde::{Deserialize, Serialize};

/// Selection mode of one control instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// One item, parents only
    SingleFlat,
    /// One item, parents or children
    SingleTree,
    /// Many parents
    MultiFlat,
    /// Many items with tri-state parents
    MultiTree,
}

impl SelectionMode {
    /// Derive the mode from the two capability flags
    pub fn from_flags(multi_select: bool, tree_view: bool) -> Self {
        match (multi_select, tree_view) {
            (false, false) => SelectionMode::SingleFlat,
            (false, true) => SelectionMode::SingleTree,
            (true, false) => SelectionMode::MultiFlat,
            (true, true) => SelectionMode::MultiTree,
        }
    }

    /// Returns true for the multi-select modes
    pub fn is_multi(&self) -> bool {
        matches!(self, SelectionMode::MultiFlat | SelectionMode::MultiTree)
    }

    /// Returns true for the tree modes (children are rendered)
    pub fn is_tree(&self) -> bool {
        matches!(self, SelectionMode::SingleTree | SelectionMode::MultiTree)
    }

    /// Returns true when parent marks are derived from their children
    pub fn propagates(&self) -> bool {
        matches!(self, SelectionMode::MultiTree)
    }

    /// Stable name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::SingleFlat => "single-flat",
            SelectionMode::SingleTree => "single-tree",
            SelectionMode::MultiFlat => "multi-flat",
            SelectionMode::MultiTree => "multi-tree",
        }
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
