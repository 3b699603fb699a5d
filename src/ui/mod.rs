//! Terminal presentation for the `treeselect` binary

pub mod json;
pub mod output;
pub mod picker;
pub mod terminal;
pub mod theme;
