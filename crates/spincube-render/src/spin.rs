use glam::{Mat4, Vec3};
use spincube_math::mat;
use std::f32::consts::TAU;

/// Rotation state for the cube.
///
/// Owns the four matrices that outlive a frame: the constant identity, the
/// two per-axis rotations, and the composed world matrix. [`Spin::update`]
/// rewrites the rotation and world matrices in place from elapsed time; no
/// other state carries across frames.
#[derive(Debug, Clone)]
pub struct Spin {
    period_secs: f32,
    identity: Mat4,
    y_rotation: Mat4,
    x_rotation: Mat4,
    world: Mat4,
}

impl Spin {
    /// One full Y revolution every `period_secs`. The X axis turns at a
    /// quarter of that rate. The period must be positive; the CLI enforces
    /// it before construction.
    pub fn new(period_secs: f32) -> Self {
        tracing::debug!(period_secs, "spin state initialized");
        Self {
            period_secs,
            identity: Mat4::IDENTITY,
            y_rotation: Mat4::IDENTITY,
            x_rotation: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
        }
    }

    pub fn period_secs(&self) -> f32 {
        self.period_secs
    }

    /// Rotation angle in radians after `elapsed_secs` of wall-clock time.
    pub fn angle_at(&self, elapsed_secs: f64) -> f32 {
        elapsed_secs as f32 / self.period_secs * TAU
    }

    /// Recompute the world matrix for the given elapsed time:
    /// `world = Ry(angle) * Rx(angle / 4)`. Zero elapsed time yields the
    /// identity.
    pub fn update(&mut self, elapsed_secs: f64) -> &Mat4 {
        let angle = self.angle_at(elapsed_secs);
        mat::rotate(&mut self.y_rotation, &self.identity, angle, Vec3::Y);
        mat::rotate(&mut self.x_rotation, &self.identity, angle / 4.0, Vec3::X);
        mat::multiply(&mut self.world, &self.y_rotation, &self.x_rotation);
        &self.world
    }

    /// World matrix as of the last [`Spin::update`].
    pub fn world(&self) -> &Mat4 {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_elapsed_is_identity() {
        let mut spin = Spin::new(6.0);
        spin.update(0.0);
        assert_eq!(*spin.world(), Mat4::IDENTITY);
    }

    #[test]
    fn full_period_is_one_revolution() {
        let spin = Spin::new(6.0);
        assert!((spin.angle_at(6.0) - TAU).abs() < 1e-5);
        assert!((spin.angle_at(1.5) - TAU / 4.0).abs() < 1e-5);
    }

    #[test]
    fn world_composes_y_then_x() {
        let mut spin = Spin::new(6.0);
        let world = *spin.update(1.0);

        let angle = spin.angle_at(1.0);
        let expected = Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle / 4.0);

        let diff: f32 = world
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(diff < 1e-4);
    }

    #[test]
    fn update_overwrites_previous_frame() {
        let mut spin = Spin::new(6.0);
        let first = *spin.update(1.0);
        let second = *spin.update(2.0);
        assert_ne!(first, second);

        // Rewinding to the earlier timestamp reproduces the earlier matrix.
        assert_eq!(*spin.update(1.0), first);
    }
}
