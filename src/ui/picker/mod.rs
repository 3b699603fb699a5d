//! Picker Widget
//!
//! A terminal tree picker driving a [`treeselect::SelectControl`]. Marks,
//! visibility and propagation all live in the control; the picker only
//! tracks the cursor, expanded parents and the search line.
//!
//! # Module Structure
//!
//! - `menu` - Picker state and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::Picker;
