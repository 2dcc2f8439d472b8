//! Contact tracking and the stroke-capture state machine.
//!
//! This module turns normalized `(contact, x, y)` calls from an input-dispatch
//! layer into strokes on a [`DrawingSurface`](crate::draw::DrawingSurface).
//! It tracks which contacts are down, accumulates their points, and decides per
//! update whether the gesture renders as an open path or a filled ring.

pub mod contact;
pub mod engine;
pub mod events;
pub mod mode;

// Re-export commonly used types at module level
pub use contact::{Contact, ContactId};
pub use engine::{DrawingState, StrokeEngine};
pub use events::{InputEvent, ScriptError, parse_script};
pub use mode::ContactMode;

#[cfg(test)]
mod tests;
