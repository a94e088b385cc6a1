//! Bubble sphere: mesh generation, MVP math, and the glass pipeline.
//!
//! The glass pass reads the backdrop texture and refracts it through the
//! displaced sphere surface, writing into the scene texture that feeds the
//! bloom and composite passes.

pub mod matrix;
mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
