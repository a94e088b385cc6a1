//! Rendering for the bubble scene.
//!
//! The CPU side ([`displace`], [`mesh`], [`scene`]) animates the bubble
//! geometry and is fully testable without a GPU. The GPU side ([`gpu`],
//! [`mask`], [`sphere`], [`bloom`], [`post`], [`render_state`]) turns a
//! [`BubbleScene`] into pixels.

pub mod bloom;
pub mod displace;
pub mod gpu;
pub mod mask;
pub mod mesh;
pub mod perf;
pub mod post;
pub mod render_state;
pub mod scene;
pub mod sphere;

pub use displace::{DisplacementParams, DisplacementTarget, NoiseDisplacer, Rotation, TickOutcome};
pub use gpu::{GpuContext, RendererError};
pub use mesh::MeshInstance;
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use scene::{BubbleScene, Camera, SceneChange, SceneFeatures};
