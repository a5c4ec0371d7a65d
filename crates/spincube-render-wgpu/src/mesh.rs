use bytemuck::{Pod, Zeroable};

/// Interleaved cube vertex: position then color, both `vec3<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

const fn v(position: [f32; 3], color: [f32; 3]) -> Vertex {
    Vertex { position, color }
}

/// The demo cube: 24 vertices (four per face, each face a flat color) and
/// 36 indices with counter-clockwise front faces.
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    const GRAY: [f32; 3] = [0.5, 0.5, 0.5];
    const MAUVE: [f32; 3] = [0.75, 0.25, 0.5];
    const SLATE: [f32; 3] = [0.25, 0.25, 0.75];
    const RED: [f32; 3] = [1.0, 0.0, 0.15];
    const GREEN: [f32; 3] = [0.0, 1.0, 0.15];
    const SKY: [f32; 3] = [0.5, 0.5, 1.0];

    #[rustfmt::skip]
    let vertices = vec![
        // top (+Y)
        v([-1.0,  1.0, -1.0], GRAY),
        v([-1.0,  1.0,  1.0], GRAY),
        v([ 1.0,  1.0,  1.0], GRAY),
        v([ 1.0,  1.0, -1.0], GRAY),
        // left (-X)
        v([-1.0,  1.0,  1.0], MAUVE),
        v([-1.0, -1.0,  1.0], MAUVE),
        v([-1.0, -1.0, -1.0], MAUVE),
        v([-1.0,  1.0, -1.0], MAUVE),
        // right (+X)
        v([ 1.0,  1.0,  1.0], SLATE),
        v([ 1.0, -1.0,  1.0], SLATE),
        v([ 1.0, -1.0, -1.0], SLATE),
        v([ 1.0,  1.0, -1.0], SLATE),
        // front (+Z)
        v([ 1.0,  1.0,  1.0], RED),
        v([ 1.0, -1.0,  1.0], RED),
        v([-1.0, -1.0,  1.0], RED),
        v([-1.0,  1.0,  1.0], RED),
        // back (-Z)
        v([ 1.0,  1.0, -1.0], GREEN),
        v([ 1.0, -1.0, -1.0], GREEN),
        v([-1.0, -1.0, -1.0], GREEN),
        v([-1.0,  1.0, -1.0], GREEN),
        // bottom (-Y)
        v([-1.0, -1.0, -1.0], SKY),
        v([-1.0, -1.0,  1.0], SKY),
        v([ 1.0, -1.0,  1.0], SKY),
        v([ 1.0, -1.0, -1.0], SKY),
    ];

    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0, 1, 2,    0, 2, 3,    // top
        5, 4, 6,    6, 4, 7,    // left
        8, 9, 10,   8, 10, 11,  // right
        13, 12, 14, 15, 14, 12, // front
        16, 17, 18, 16, 18, 19, // back
        21, 20, 22, 22, 20, 23, // bottom
    ];

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_four_vertices_per_face() {
        let (vertices, indices) = cube_mesh();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
    }

    #[test]
    fn indices_stay_in_bounds() {
        let (vertices, indices) = cube_mesh();
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn each_face_is_flat_colored() {
        let (vertices, _) = cube_mesh();
        let mut colors = Vec::new();
        for face in vertices.chunks(4) {
            assert!(face.iter().all(|vert| vert.color == face[0].color));
            colors.push(face[0].color);
        }
        colors.sort_by(|a, b| a.partial_cmp(b).unwrap());
        colors.dedup();
        assert_eq!(colors.len(), 6, "all six faces have distinct colors");
    }

    #[test]
    fn vertices_lie_on_the_unit_cube() {
        let (vertices, _) = cube_mesh();
        assert!(
            vertices
                .iter()
                .flat_map(|vert| vert.position)
                .all(|c| c == 1.0 || c == -1.0)
        );
    }
}
