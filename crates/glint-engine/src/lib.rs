//! glint engine crate.
//!
//! A single-surface, immediate-submission 2D drawing context: configure a
//! window, drive the frame loop yourself, issue stateless draw calls.
//!
//! Threading: the whole API is designed for exclusive use from one thread.
//! No internal locking exists; concurrent access is unsupported.

pub mod backend;
pub mod cache;
pub mod config;
pub mod context;
pub mod coords;
pub mod draw;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;
pub mod time;

mod device;
mod render;
mod text;

pub use backend::Backend;
pub use backend::window::WindowBackend;
pub use cache::{FontId, TextureId};
pub use config::{Config, HintKey, HintValue};
pub use context::{Context, FramePoll};
pub use coords::{Vec2, Viewport};
pub use draw::{Outline, TextAlign};
pub use error::{Error, Result};
pub use input::Key;
pub use paint::Color;
