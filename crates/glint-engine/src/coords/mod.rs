//! Coordinate types.
//!
//! Convention: logical pixels, top-left origin, +Y down. The backend converts
//! to NDC in its vertex shaders using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
