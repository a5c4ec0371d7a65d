use crate::spin::Spin;
use crate::view::SceneView;
use spincube_math::to_deg;

/// Renderer-agnostic interface. All backends implement this trait.
///
/// A backend reads the already-updated spin state and view configuration and
/// produces output. It never mutates scene state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state.
    fn render(&self, spin: &Spin, view: &SceneView, elapsed_secs: f64) -> Self::Output;
}

/// Text renderer for headless runs and tests.
///
/// Produces a human-readable description of the frame: elapsed time, spin
/// angle, camera, and the world matrix's rotated X axis.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, spin: &Spin, view: &SceneView, elapsed_secs: f64) -> String {
        let angle_deg = to_deg(spin.angle_at(elapsed_secs));
        let x_axis = spin.world().x_axis;

        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame t={elapsed_secs:.3}s angle={angle_deg:.1}\u{b0} ===\n"
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\u{b0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            to_deg(view.fov_y),
        ));
        out.push_str(&format!(
            "Cube X axis: ({:.3}, {:.3}, {:.3})\n",
            x_axis.x, x_axis.y, x_axis.z
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_renderer_reports_frame_state() {
        let mut spin = Spin::new(6.0);
        spin.update(1.5);

        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&spin, &SceneView::default(), 1.5);

        // 1.5s into a 6s period is a quarter turn.
        assert!(output.contains("angle=90.0"));
        assert!(output.contains("eye=(0.0, 0.0, -8.0)"));
        assert!(output.contains("fov=45"));
    }

    #[test]
    fn text_renderer_at_start_shows_unrotated_axis() {
        let mut spin = Spin::new(6.0);
        spin.update(0.0);

        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&spin, &SceneView::default(), 0.0);

        assert!(output.contains("Cube X axis: (1.000, 0.000, 0.000)"));
    }
}
