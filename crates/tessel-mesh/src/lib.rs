//! CPU mesher: one quad per exposed voxel face, with optional vertex sharing
//! and per-type vertex colors.
#![forbid(unsafe_code)]

pub mod assembly;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod sink;
pub mod visibility;

pub use assembly::Mesh;
pub use engine::{
    GenerateStats, MeshConfig, MeshGenerator, count_visible_faces, generate_mesh, vertex_upper_bound,
};
pub use error::MeshError;
pub use geometry::{QUAD_TRIANGLES, corner_offsets, face_normal, half_offsets};
pub use palette::{Palette, PaletteConfig, Rgba};
pub use sink::{AppendSink, DedupSink, HalfPoint, VertexSink};
pub use visibility::is_visible;

// Re-exported so callers can build grids without naming the grid crate.
pub use tessel_grid::{Direction, VoxelGrid, VoxelType};
