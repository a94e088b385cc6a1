//! Frame orchestration: owns every GPU resource and records the passes.
//!
//! Pass order per frame:
//! 1. backdrop: clear, stencil silhouette (mask), image quad
//! 2. copy backdrop → scene, then glass bubble over it
//! 3. bloom (when enabled)
//! 4. composite to the surface

mod frame;
mod helpers;
mod state;
mod targets;
mod transforms;

pub use state::RenderState;
pub use transforms::SceneTransforms;
