//! wgpu render backend for the spinning-cube demo.
//!
//! Renders one static colored cube whose world matrix is rewritten every
//! frame from the spin state. Setup happens once: shader module, pipeline,
//! vertex/index buffers, and the view/projection uniforms.
//!
//! # Invariants
//! - The backend never mutates scene state.
//! - Geometry and the view/projection matrices are uploaded once; only the
//!   world-matrix slice of the uniform buffer changes per frame.
//! - Setup failures surface as [`GpuError`]; rendering itself has no
//!   fallible paths.

mod gpu;
mod mesh;
mod shaders;

pub use gpu::{CubeRenderer, GpuError, acquire_device};
pub use mesh::{Vertex, cube_mesh};
