//! treeselect - hierarchical multi-mode selection state
//!
//! Keeps a two-level tree of checkable items consistent: tri-state parents
//! follow their children, bulk operations honor an active search, and the
//! selection can be read and written by caller-supplied ids in four modes
//! (single/multi × flat/tree).

pub mod config;
pub mod control;
pub mod diagnostics;
pub mod domain;
pub mod engine;
pub mod error;
pub mod registry;

// Re-exports for convenience
pub use config::{ControlConfig, Flag, Flags};
pub use control::{ControlEvent, SelectControl};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
pub use domain::entities::Item;
pub use domain::value_objects::{CompositeId, Identifier, Mark, Scope, SelectionMode};
pub use engine::{NodeKey, Selection, SelectionItem, SelectionRequest, SelectionTree, StateDelta};
pub use error::{TreeSelectError, TreeSelectResult};
pub use registry::ControlRegistry;
