//! Domain Entities
//!
//! - `Item` - A caller-supplied option, optionally with children

mod item;

pub use item::Item;
