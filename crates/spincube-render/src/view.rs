use glam::{Mat4, Vec3};
use spincube_math::{mat, to_rad};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up direction, normally +Y.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -8.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: to_rad(45.0),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl SceneView {
    pub fn view_matrix(&self) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        mat::look_at(&mut m, self.eye, self.target, self.up);
        m
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        mat::perspective(&mut m, self.fov_y, self.aspect, self.near, self.far);
        m
    }

    /// Update the aspect ratio from a framebuffer size, guarding against a
    /// zero-height window.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_matches_the_demo_camera() {
        let view = SceneView::default();
        assert_eq!(view.eye, Vec3::new(0.0, 0.0, -8.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert!((view.fov_y - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let view = SceneView::default();
        let eye_in_view = view.view_matrix() * Vec4::new(0.0, 0.0, -8.0, 1.0);
        assert!(eye_in_view.truncate().length() < 1e-5);
    }

    #[test]
    fn set_aspect_guards_zero_height() {
        let mut view = SceneView::default();
        view.set_aspect(1280, 0);
        assert!(view.aspect.is_finite());
        view.set_aspect(1920, 1080);
        assert!((view.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn projection_is_finite() {
        let view = SceneView::default();
        let p = view.projection_matrix();
        assert!(p.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
