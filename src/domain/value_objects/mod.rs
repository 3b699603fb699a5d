//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod composite_id;
mod identifier;
mod mark;
mod mode;
mod scope;

pub use composite_id::{CompositeId, SEPARATOR};
pub use identifier::Identifier;
pub use mark::Mark;
pub use mode::SelectionMode;
pub use scope::Scope;
