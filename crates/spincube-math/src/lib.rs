//! Math convenience layer over glam.
//!
//! glam remains the linear-algebra provider; this crate only adds a thin
//! convenience surface: free constructors, in-place vector setters, scalar
//! angle conversion, and out-parameter matrix transforms that write into
//! caller-owned storage.
//!
//! # Invariants
//! - All operations are total over floats: NaN and infinity pass through
//!   unchanged, never special-cased.
//! - Out-parameter functions write into caller-owned storage and allocate
//!   nothing.
//! - No operation in this crate fails or panics.

pub mod mat;
pub mod scalar;
pub mod vec;

pub use glam::{Mat3, Mat4, Vec2, Vec3, vec2, vec3};
pub use scalar::{clamp, to_deg, to_rad};
pub use vec::{Vec2Ext, Vec3Ext};
