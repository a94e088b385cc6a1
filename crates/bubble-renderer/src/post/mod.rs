//! Final composite: color grading and bloom onto the window surface.

mod composite;
mod hue;

pub use composite::*;
pub use hue::*;
