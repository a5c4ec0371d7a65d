//! Out-parameter `Mat4`/`Mat3` transforms.
//!
//! Every function writes its result into caller-owned storage, so the
//! per-frame rotation and world matrices can be recomputed in place without
//! touching the allocator. Matrices are column-major throughout (glam's
//! layout).

use glam::{Mat3, Mat4, Vec3};

/// `out = I`
#[inline]
pub fn identity(out: &mut Mat4) {
    *out = Mat4::IDENTITY;
}

/// `out = a`
#[inline]
pub fn copy(out: &mut Mat4, a: &Mat4) {
    *out = *a;
}

/// `out = a + b`
#[inline]
pub fn add(out: &mut Mat4, a: &Mat4, b: &Mat4) {
    *out = *a + *b;
}

/// `out = a - b`
#[inline]
pub fn subtract(out: &mut Mat4, a: &Mat4, b: &Mat4) {
    *out = *a - *b;
}

/// `out = a * b`
#[inline]
pub fn multiply(out: &mut Mat4, a: &Mat4, b: &Mat4) {
    *out = *a * *b;
}

/// `out = a * s`
#[inline]
pub fn multiply_scalar(out: &mut Mat4, a: &Mat4, s: f32) {
    *out = *a * s;
}

/// `out = a * R(rad, axis)`. The axis is normalized here; a zero axis
/// produces a non-finite rotation rather than an error.
#[inline]
pub fn rotate(out: &mut Mat4, a: &Mat4, rad: f32, axis: Vec3) {
    *out = *a * Mat4::from_axis_angle(axis.normalize(), rad);
}

/// `out = a * Rx(rad)`
#[inline]
pub fn rotate_x(out: &mut Mat4, a: &Mat4, rad: f32) {
    *out = *a * Mat4::from_rotation_x(rad);
}

/// `out = a * Ry(rad)`
#[inline]
pub fn rotate_y(out: &mut Mat4, a: &Mat4, rad: f32) {
    *out = *a * Mat4::from_rotation_y(rad);
}

/// `out = a * Rz(rad)`
#[inline]
pub fn rotate_z(out: &mut Mat4, a: &Mat4, rad: f32) {
    *out = *a * Mat4::from_rotation_z(rad);
}

/// `out = a * T(v)`
#[inline]
pub fn translate(out: &mut Mat4, a: &Mat4, v: Vec3) {
    *out = *a * Mat4::from_translation(v);
}

/// `out = a * S(v)`
#[inline]
pub fn scale(out: &mut Mat4, a: &Mat4, v: Vec3) {
    *out = *a * Mat4::from_scale(v);
}

/// Right-handed view matrix looking from `eye` toward `center`. Applying
/// the result to `eye` lands on the view-space origin.
#[inline]
pub fn look_at(out: &mut Mat4, eye: Vec3, center: Vec3, up: Vec3) {
    *out = Mat4::look_at_rh(eye, center, up);
}

/// Right-handed perspective projection with 0..1 depth (wgpu clip space).
#[inline]
pub fn perspective(out: &mut Mat4, fovy_rad: f32, aspect: f32, near: f32, far: f32) {
    *out = Mat4::perspective_rh(fovy_rad, aspect, near, far);
}

/// Right-handed orthographic projection with 0..1 depth.
#[inline]
pub fn ortho(out: &mut Mat4, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
    *out = Mat4::orthographic_rh(left, right, bottom, top, near, far);
}

/// `out = transpose(a)`
#[inline]
pub fn transpose(out: &mut Mat4, a: &Mat4) {
    *out = a.transpose();
}

/// Writes the inverse of `a` and returns `true`. When `a` is singular,
/// returns `false` and leaves `out` untouched.
pub fn invert(out: &mut Mat4, a: &Mat4) -> bool {
    if a.determinant() == 0.0 {
        return false;
    }
    *out = a.inverse();
    true
}

/// Writes the normal matrix of `a` (inverse-transpose of the upper 3x3) and
/// returns `true`. Same singular-matrix contract as [`invert`].
pub fn normal_from_mat4(out: &mut Mat3, a: &Mat4) -> bool {
    if a.determinant() == 0.0 {
        return false;
    }
    *out = Mat3::from_mat4(a.inverse().transpose());
    true
}
