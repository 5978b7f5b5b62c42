//! Final mesh value handed to renderers.

use std::io::{self, Write};

use tessel_geom::{Aabb, Vec3};

use crate::palette::Rgba;

/// Immutable result of one generation pass.
///
/// Invariants: `indices.len()` is a multiple of 3 and every index is below
/// `vertices.len()`; `normals` is parallel to `vertices`; `colors`, when
/// present, is parallel to `vertices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    colors: Option<Vec<Rgba>>,
    face_count: usize,
}

/// Per-vertex normals: the normalized sum of the normals of every face that
/// touches each vertex.
///
/// `indices` is laid out as the engine emits it, six per quad in the
/// [`QUAD_TRIANGLES`](crate::geometry::QUAD_TRIANGLES) fan, so each quad adds
/// its normal once to each of its four corners. Trailing indices that do not
/// fill a quad count as single triangles.
pub(crate) fn vertex_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let pos = |i: u32| vertices[i as usize];
    let normal = |a: u32, b: u32, c: u32| (pos(b) - pos(a)).cross(pos(c) - pos(a)).normalized();

    let mut sum = vec![Vec3::ZERO; vertices.len()];
    let quads = indices.chunks_exact(6);
    let rest = quads.remainder();
    for q in quads {
        let n = normal(q[0], q[1], q[2]);
        for i in [q[0], q[1], q[2], q[5]] {
            sum[i as usize] += n;
        }
    }
    for t in rest.chunks_exact(3) {
        let n = normal(t[0], t[1], t[2]);
        for &i in t {
            sum[i as usize] += n;
        }
    }
    sum.into_iter().map(Vec3::normalized).collect()
}

impl Mesh {
    /// Assembles a mesh and derives its normals.
    ///
    /// # Panics
    /// If `indices` is not a whole number of triangles, an index is out of
    /// range, or `colors` is not parallel to `vertices`.
    pub(crate) fn assemble(
        vertices: Vec<Vec3>,
        indices: Vec<u32>,
        colors: Option<Vec<Rgba>>,
        face_count: usize,
    ) -> Self {
        assert!(indices.len() % 3 == 0, "index count {} not a multiple of 3", indices.len());
        assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "triangle index out of range for {} vertices",
            vertices.len()
        );
        if let Some(cols) = &colors {
            assert_eq!(cols.len(), vertices.len(), "colors must be parallel to vertices");
        }
        let normals = vertex_normals(&vertices, &indices);
        Self {
            vertices,
            normals,
            indices,
            colors,
            face_count,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Flat triangle list, three indices per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn colors(&self) -> Option<&[Rgba]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of voxel faces emitted (two triangles each).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Triangles resolved to positions.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles()
            .map(|t| t.map(|i| self.vertices[i as usize]))
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<u32>, Option<Vec<Rgba>>) {
        (self.vertices, self.normals, self.indices, self.colors)
    }

    /// Writes Wavefront OBJ text. Colors, when present, use the common
    /// `v x y z r g b` extension with components in `[0, 1]`.
    pub fn write_obj(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(
            out,
            "# tessel mesh: {} vertices, {} triangles",
            self.vertex_count(),
            self.triangle_count()
        )?;
        for (i, v) in self.vertices.iter().enumerate() {
            match &self.colors {
                Some(cols) => {
                    let c = cols[i];
                    writeln!(
                        out,
                        "v {} {} {} {:.4} {:.4} {:.4}",
                        v.x,
                        v.y,
                        v.z,
                        c[0] as f32 / 255.0,
                        c[1] as f32 / 255.0,
                        c[2] as f32 / 255.0
                    )?;
                }
                None => writeln!(out, "v {} {} {}", v.x, v.y, v.z)?,
            }
        }
        for n in &self.normals {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        out.flush()
    }
}
