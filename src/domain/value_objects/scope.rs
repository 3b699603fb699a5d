//! Scope value object - which children a propagation step looks at
//!
//! - `All`: every child of the parent
//! - `VisibleOnly`: only children passing the active search filter

use serde::{Deserialize, Serialize};

/// Visibility scope of a propagation or bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Every node, visible or not
    #[default]
    All,
    /// Only nodes the search collaborator currently shows
    VisibleOnly,
}

impl Scope {
    /// Scope to use given whether a search filter is active
    pub fn for_search(search_active: bool) -> Self {
        if search_active {
            Scope::VisibleOnly
        } else {
            Scope::All
        }
    }

    /// Returns true if a node with the given visibility is in scope
    pub fn includes(&self, visible: bool) -> bool {
        match self {
            Scope::All => true,
            Scope::VisibleOnly => visible,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::VisibleOnly => write!(f, "visible-only"),
        }
    }
}
