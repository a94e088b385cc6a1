//! Procedural vertex-noise displacement.
//!
//! Every frame, each vertex of the bubble is pushed along its radial
//! direction by a sum of three traveling sine waves (one per axis) driven
//! by a shared clock. The base shape is captured from the first frame the
//! mesh has geometry and is never modified afterwards, so the animation
//! never drifts.

mod displacer;
mod types;

pub use displacer::*;
pub use types::*;
