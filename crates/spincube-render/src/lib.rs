//! Renderer-agnostic scene state for the spinning-cube demo.
//!
//! # Invariants
//! - Backends never mutate scene state through the [`Renderer`] seam.
//! - The spin's matrix storage is allocated once and rewritten in place
//!   every frame.
//! - Elapsed time is the only input driving the animation.

pub mod renderer;
pub mod spin;
pub mod view;

pub use renderer::{DebugTextRenderer, Renderer};
pub use spin::Spin;
pub use view::SceneView;
