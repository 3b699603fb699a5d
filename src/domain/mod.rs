//! Domain Layer
//!
//! Plain data the selection engine works on, without any state of its own.
//!
//! ## Structure
//!
//! - `entities/` - Caller-supplied items (`Item`)
//! - `value_objects/` - Ids, marks, modes and scopes
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal
//! 2. **Immutable** - Values are cloned, never mutated in place by the engine

pub mod entities;
pub mod value_objects;
