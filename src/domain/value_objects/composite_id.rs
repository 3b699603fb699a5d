//! Composite node id value object
//!
//! Format: `container-parent` for a parent node and
//! `container-parent-child` for a child node. There is no escaping, so ids
//! that themselves contain `-` can produce ambiguous composites.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;

/// Separator between composite id segments
pub const SEPARATOR: char = '-';

/// Identifier of one rendered node within a control instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeId(String);

impl CompositeId {
    /// Build the composite id of a parent (`child == None`) or child node
    pub fn new(container_id: &str, parent_id: &Identifier, child_id: Option<&Identifier>) -> Self {
        let mut id = format!("{container_id}{SEPARATOR}{parent_id}");
        if let Some(child) = child_id {
            id.push(SEPARATOR);
            id.push_str(child.as_str());
        }
        Self(id)
    }

    /// Wrap an already formatted composite id (e.g. one echoed back by a host)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompositeId {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}
