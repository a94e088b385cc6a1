//! Scene composition: which passes run, the camera, and the animated meshes.

mod bubble;
mod camera;
mod features;

pub use bubble::*;
pub use camera::*;
pub use features::*;
