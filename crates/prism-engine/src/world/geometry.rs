use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Non-indexed triangle list with flat normals plus a de-duplicated edge list.
///
/// Triangles are wound counter-clockwise when seen from outside.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    vertices: Vec<Vertex>,
    /// Pairs of endpoints, one pair per unique edge.
    edges: Vec<Vertex>,
}

impl Geometry {
    /// Builds an icosahedron of the given circumradius.
    ///
    /// `detail` subdivides every edge into `detail + 1` segments; new vertices
    /// are pushed out onto the sphere. `detail = 0` is the plain 20-face solid.
    pub fn icosahedron(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

        #[rustfmt::skip]
        let corners = [
            Vec3::new(-1.0,  t, 0.0), Vec3::new( 1.0,  t, 0.0),
            Vec3::new(-1.0, -t, 0.0), Vec3::new( 1.0, -t, 0.0),
            Vec3::new(0.0, -1.0,  t), Vec3::new(0.0,  1.0,  t),
            Vec3::new(0.0, -1.0, -t), Vec3::new(0.0,  1.0, -t),
            Vec3::new( t, 0.0, -1.0), Vec3::new( t, 0.0,  1.0),
            Vec3::new(-t, 0.0, -1.0), Vec3::new(-t, 0.0,  1.0),
        ];

        #[rustfmt::skip]
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
            [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
            [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
            [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
        ];

        let mut triangles = Vec::with_capacity(FACES.len() * ((detail + 1) * (detail + 1)) as usize);
        for [a, b, c] in FACES {
            subdivide(corners[a], corners[b], corners[c], detail, &mut triangles);
        }

        let radius = radius.max(0.0);
        for tri in &mut triangles {
            for p in tri.iter_mut() {
                *p = p.normalize() * radius;
            }
        }

        Self::from_triangles(&triangles)
    }

    /// Builds flat-shaded geometry from counter-clockwise triangles.
    pub fn from_triangles(triangles: &[[Vec3; 3]]) -> Self {
        let mut vertices = Vec::with_capacity(triangles.len() * 3);
        let mut edges = Vec::new();
        let mut seen = HashSet::new();

        for &[a, b, c] in triangles {
            let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
            for p in [a, b, c] {
                vertices.push(Vertex { position: p.to_array(), normal });
            }

            for (p, q) in [(a, b), (b, c), (c, a)] {
                let (kp, kq) = (quantize(p), quantize(q));
                let key = if kp <= kq { (kp, kq) } else { (kq, kp) };
                if seen.insert(key) {
                    edges.push(Vertex { position: p.to_array(), normal });
                    edges.push(Vertex { position: q.to_array(), normal });
                }
            }
        }

        Self { vertices, edges }
    }

    /// Triangle-list vertices (three per face).
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Line-list vertices (two per unique edge).
    #[inline]
    pub fn edges(&self) -> &[Vertex] {
        &self.edges
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}

/// Splits triangle `abc` into `(detail + 1)^2` triangles with the same winding.
fn subdivide(a: Vec3, b: Vec3, c: Vec3, detail: u32, out: &mut Vec<[Vec3; 3]>) {
    let cols = detail as usize + 1;

    // grid[i][j]: row i walks from edge ab toward c, column j across the row.
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let f = i as f32 / cols as f32;
        let aj = a.lerp(c, f);
        let bj = b.lerp(c, f);
        let rows = cols - i;

        let row = if rows == 0 {
            vec![aj]
        } else {
            (0..=rows).map(|j| aj.lerp(bj, j as f32 / rows as f32)).collect()
        };
        grid.push(row);
    }

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.push([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.push([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}

fn quantize(p: Vec3) -> (i64, i64, i64) {
    const SCALE: f32 = 1.0e4;
    (
        (p.x * SCALE).round() as i64,
        (p.y * SCALE).round() as i64,
        (p.z * SCALE).round() as i64,
    )
}
