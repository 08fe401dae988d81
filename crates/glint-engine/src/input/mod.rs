//! Input subsystem.
//!
//! Public types are platform-agnostic and never expose winit; the window
//! backend translates platform events into [`InputEvent`]s.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key};
