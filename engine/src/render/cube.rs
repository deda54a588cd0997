//! Cube Geometry
//!
//! Shared cube meshes: the 24-vertex textured cube every block instance
//! draws, and the 8-corner edge list for the wireframe highlight. Both are
//! centered on the origin; instances and the highlight transform supply
//! the world position.

use bytemuck::{Pod, Zeroable};

use crate::world::CUBE_HALF;

/// Vertex of the textured block cube.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(CubeVertex, [u8; 32]);

/// The 24 vertices of a cube (4 per face), each face carrying the full
/// 0..1 UV rectangle.
pub fn cube_vertices() -> Vec<CubeVertex> {
    let h = CUBE_HALF;
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // (normal, u axis, v axis)
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),  // +X
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),  // -X
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),  // +Y
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),  // -Y
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),   // +Z
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), // -Z
    ];

    let mut vertices = Vec::with_capacity(24);
    for (normal, u_axis, v_axis) in faces {
        // Corner order: (-u,-v), (+u,-v), (+u,+v), (-u,+v) -> CCW from outside
        for (su, sv, uv) in [
            (-1.0, -1.0, [0.0, 1.0]),
            (1.0, -1.0, [1.0, 1.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (-1.0, 1.0, [0.0, 0.0]),
        ] {
            let position = [
                h * (normal[0] + su * u_axis[0] + sv * v_axis[0]),
                h * (normal[1] + su * u_axis[1] + sv * v_axis[1]),
                h * (normal[2] + su * u_axis[2] + sv * v_axis[2]),
            ];
            vertices.push(CubeVertex {
                position,
                normal,
                uv,
            });
        }
    }
    vertices
}

/// Triangle indices for [`cube_vertices`] (two CCW triangles per face).
pub fn cube_indices() -> Vec<u32> {
    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

/// The 8 cube corners, positions only, for the wireframe highlight.
pub fn corner_positions(half: f32) -> [[f32; 3]; 8] {
    let mut corners = [[0.0; 3]; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = [
            if i & 1 == 0 { -half } else { half },
            if i & 2 == 0 { -half } else { half },
            if i & 4 == 0 { -half } else { half },
        ];
    }
    corners
}

/// Line-list indices joining [`corner_positions`] into the 12 cube edges.
pub fn edge_indices() -> [u32; 24] {
    [
        0, 1, 1, 5, 5, 4, 4, 0, // bottom ring (y = -h)
        2, 3, 3, 7, 7, 6, 6, 2, // top ring (y = +h)
        0, 2, 1, 3, 5, 7, 4, 6, // verticals
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_24_vertices_36_indices() {
        assert_eq!(cube_vertices().len(), 24);
        assert_eq!(cube_indices().len(), 36);
    }

    #[test]
    fn test_vertices_lie_on_cube_surface() {
        for v in cube_vertices() {
            let on_face = v
                .position
                .iter()
                .any(|c| (c.abs() - CUBE_HALF).abs() < 1e-6);
            assert!(on_face, "vertex {:?} is not on the cube surface", v.position);
            for c in v.position {
                assert!(c.abs() <= CUBE_HALF + 1e-6);
            }
        }
    }

    #[test]
    fn test_normals_are_axis_aligned_units() {
        for v in cube_vertices() {
            let len2: f32 = v.normal.iter().map(|c| c * c).sum();
            assert!((len2 - 1.0).abs() < 1e-6);
            assert_eq!(v.normal.iter().filter(|c| **c != 0.0).count(), 1);
        }
    }

    #[test]
    fn test_indices_reference_valid_vertices() {
        let count = cube_vertices().len() as u32;
        assert!(cube_indices().iter().all(|i| *i < count));
        assert!(edge_indices().iter().all(|i| *i < 8));
    }

    #[test]
    fn test_edge_list_covers_each_corner() {
        let mut seen = [0u32; 8];
        for i in edge_indices() {
            seen[i as usize] += 1;
        }
        // Every cube corner joins exactly 3 edges
        assert!(seen.iter().all(|n| *n == 3), "corner degrees: {:?}", seen);
    }
}
