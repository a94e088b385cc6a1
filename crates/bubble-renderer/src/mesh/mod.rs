//! Mesh state shared between the displacer and the GPU layer.
//!
//! [`MeshInstance`] is the CPU side the displacer animates; [`MeshBuffers`]
//! mirrors it on the GPU and re-uploads positions only when they changed.

mod buffers;
mod instance;

pub use buffers::*;
pub use instance::*;
