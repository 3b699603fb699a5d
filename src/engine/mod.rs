//! Selection-state synchronization engine
//!
//! Pure state logic, no I/O. The presentation layer renders a
//! [`SelectionTree`] and feeds user actions back through the control API.
//!
//! ## Structure
//!
//! - `identity` - composite ids and per-render duplicate detection
//! - `tree` - engine-owned marks and visibility
//! - `propagation` - tri-state parent/children synchronization
//! - `bulk` - select/clear all (and invert) over the nodes in scope
//! - `extract` / `inject` - read and write the selection by caller ids
//! - `summary` - display text for a selection
//! - `search` - visibility updates and parent recalculation

pub mod bulk;
pub mod delta;
pub mod extract;
pub mod identity;
pub mod inject;
pub mod propagation;
pub mod search;
pub mod summary;
pub mod tree;

pub use bulk::{invert, toggle_all};
pub use delta::{MarkChange, StateDelta};
pub use extract::{get_selection, ItemRef, Selection, SelectionItem};
pub use identity::{generate_id, RenderPass};
pub use inject::{apply_selection, SelectionRequest};
pub use propagation::{derive_parent_mark, on_child_toggle, on_parent_toggle, recompute_all};
pub use search::{apply_query, recalculate, SubstringFilter, VisibilityFilter};
pub use summary::summarize;
pub use tree::{NodeKey, SelectionTree, TreeNode};
