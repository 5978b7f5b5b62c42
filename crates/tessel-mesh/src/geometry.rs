//! Constant per-direction quad table.
//!
//! Corners are stored in half units relative to the voxel center, so `1`
//! means `+0.5`. Each quad is laid out as
//!
//! ```text
//!   2 ---- 3
//!   |    / |
//!   |  /   |
//!   0 ---- 1
//! ```
//!
//! with `0->1` along the face's u axis and `0->2` along its v axis, where
//! `u x v` is the outward normal. Both triangles of [`QUAD_TRIANGLES`] then
//! wind counter-clockwise seen from outside the voxel.

use tessel_geom::Vec3;
use tessel_grid::Direction;

/// Four corners of one face, in half units.
pub type HalfQuad = [[i32; 3]; 4];

/// Local corner indices of the two triangles of every face.
pub const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 2, 1, 3];

/// Indexed by [`Direction::index`].
const FACE_QUADS: [HalfQuad; 6] = [
    // PosX: u = +y, v = +z
    [[1, -1, -1], [1, 1, -1], [1, -1, 1], [1, 1, 1]],
    // NegX: u = +z, v = +y
    [[-1, -1, -1], [-1, -1, 1], [-1, 1, -1], [-1, 1, 1]],
    // PosY: u = +z, v = +x
    [[-1, 1, -1], [-1, 1, 1], [1, 1, -1], [1, 1, 1]],
    // NegY: u = +x, v = +z
    [[-1, -1, -1], [1, -1, -1], [-1, -1, 1], [1, -1, 1]],
    // PosZ: u = +x, v = +y
    [[-1, -1, 1], [1, -1, 1], [-1, 1, 1], [1, 1, 1]],
    // NegZ: u = +y, v = +x
    [[-1, -1, -1], [-1, 1, -1], [1, -1, -1], [1, 1, -1]],
];

#[inline]
pub fn half_offsets(dir: Direction) -> &'static HalfQuad {
    &FACE_QUADS[dir.index()]
}

/// Corner offsets from the voxel center, each component `±0.5`.
#[inline]
pub fn corner_offsets(dir: Direction) -> [Vec3; 4] {
    let quad = *half_offsets(dir);
    quad.map(Vec3::from_half_lattice)
}

/// Outward unit normal of a face.
#[inline]
pub fn face_normal(dir: Direction) -> Vec3 {
    let (dx, dy, dz) = dir.delta();
    Vec3::new(dx as f32, dy as f32, dz as f32)
}
