//! Bloom (Gaussian blur) post-processing pipeline.
//!
//! Two-pass blur: horizontal with luminance extraction, then vertical.
//! Reads from the scene texture and produces a soft glow texture that the
//! composite pass adds on top. Skipped when the scene's bloom feature is off.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
