//! Mark value object - the tri-state check mark of a node

use serde::{Deserialize, Serialize};

/// Check mark of a tree node
///
/// Only parents may be `Indeterminate`; children are strictly binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Not selected (○)
    #[default]
    Unchecked,
    /// Selected (●)
    Checked,
    /// Some but not all children selected (◐)
    Indeterminate,
}

impl Mark {
    /// Binary mark for a direct toggle target
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Mark::Checked
        } else {
            Mark::Unchecked
        }
    }

    /// Returns true if this mark is `Checked`
    pub fn is_checked(&self) -> bool {
        matches!(self, Mark::Checked)
    }

    /// Returns true if this mark is `Indeterminate`
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Mark::Indeterminate)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Unchecked => write!(f, "unchecked"),
            Mark::Checked => write!(f, "checked"),
            Mark::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
