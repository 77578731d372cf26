//! GPU-side frame flush.
//!
//! [`MeshRenderer`] turns a recorded [`Stage`](crate::scene::Stage) into
//! draw calls: one forward pass over the submission list, per-object
//! uniforms addressed through dynamic offsets, then an optional overlay on
//! top of the scene.

mod depth;
mod flush;
mod objects;
mod overlay;
mod pipeline;
mod uniforms;

pub use depth::{DEPTH_FORMAT, DepthTarget};
pub use flush::MeshRenderer;
pub use objects::ObjectUniforms;
pub use overlay::Overlay;
pub use pipeline::MeshPipeline;
pub use uniforms::{ObjectParamsUniform, SceneUniform, ViewProjectionUniform, WorldUniform};
