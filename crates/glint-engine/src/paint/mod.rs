//! Color handling.

mod color;

pub use color::Color;
