//! WebGPU rendering module
//!
//! `scene` turns a session into world-space triangles; `pipeline` uploads
//! them through the camera and draws.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, world_to_ndc};
pub use vertex::Vertex;
