//! Voxel grid to mesh orchestration.

use serde::{Deserialize, Serialize};
use tessel_grid::{Direction, EMPTY, VoxelGrid};

use crate::assembly::Mesh;
use crate::error::MeshError;
use crate::geometry::{QUAD_TRIANGLES, half_offsets};
use crate::palette::{Palette, Rgba};
use crate::sink::{AppendSink, DedupSink, VertexSink};
use crate::visibility::is_visible;

/// Selects the vertex policy and whether colors are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Share one vertex between all faces meeting at a corner.
    pub dedup_vertices: bool,
    /// Attach a palette color to every vertex. Append policy only.
    pub assign_colors: bool,
}

impl MeshConfig {
    pub const APPEND: MeshConfig = MeshConfig {
        dedup_vertices: false,
        assign_colors: false,
    };
    pub const APPEND_COLORED: MeshConfig = MeshConfig {
        dedup_vertices: false,
        assign_colors: true,
    };
    pub const DEDUP: MeshConfig = MeshConfig {
        dedup_vertices: true,
        assign_colors: false,
    };

    /// Every combination [`MeshGenerator::generate`] accepts.
    pub const VALID: [MeshConfig; 3] = [Self::APPEND, Self::APPEND_COLORED, Self::DEDUP];

    pub fn validate(&self) -> Result<(), MeshError> {
        if self.dedup_vertices && self.assign_colors {
            return Err(MeshError::ColorsRequireAppend);
        }
        Ok(())
    }
}

/// Counters from the most recent pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub occupied: usize,
    pub faces: usize,
    /// Faces of occupied voxels hidden by a non-empty neighbor.
    pub culled_faces: usize,
    pub faces_by_direction: [usize; 6],
    pub vertices: usize,
    pub triangles: usize,
}

/// Faces `grid` will emit: every occupied cell side whose neighbor is empty.
pub fn count_visible_faces(grid: &VoxelGrid) -> usize {
    grid.iter()
        .filter(|&(_, id)| id != EMPTY)
        .map(|((x, y, z), id)| {
            Direction::ALL
                .iter()
                .filter(|&&dir| is_visible(id, grid.neighbor(x, y, z, dir)))
                .count()
        })
        .sum()
}

fn bound_for_faces(grid: &VoxelGrid, config: &MeshConfig, faces: usize) -> u64 {
    let per_face = faces as u64 * 4;
    if config.dedup_vertices {
        let (sx, sy, sz) = grid.dims();
        let lattice = (sx as u64 + 1) * (sy as u64 + 1) * (sz as u64 + 1);
        per_face.min(lattice)
    } else {
        per_face
    }
}

/// Largest vertex count `grid` can produce under `config`: four per visible
/// face, capped by the corner lattice when vertices are shared.
pub fn vertex_upper_bound(grid: &VoxelGrid, config: &MeshConfig) -> u64 {
    bound_for_faces(grid, config, count_visible_faces(grid))
}

/// `u32` indices address at most `2^32` vertices.
fn check_index_space(upper_bound: u64) -> Result<(), MeshError> {
    if upper_bound > u64::from(u32::MAX) + 1 {
        return Err(MeshError::TooManyVertices { upper_bound });
    }
    Ok(())
}

struct ColorTarget<'a> {
    colors: &'a mut Vec<Rgba>,
    palette: &'a Palette,
}

/// Walks the grid `x` outer, `y` middle, `z` inner and emits every visible
/// face into `sink`.
fn emit_visible_faces<S: VertexSink>(
    grid: &VoxelGrid,
    sink: &mut S,
    indices: &mut Vec<u32>,
    mut colors: Option<ColorTarget<'_>>,
    stats: &mut GenerateStats,
) {
    for ((x, y, z), id) in grid.iter() {
        if id == EMPTY {
            continue;
        }
        stats.occupied += 1;
        let center = [2 * x as i32, 2 * y as i32, 2 * z as i32];
        for dir in Direction::EMIT_ORDER {
            if !is_visible(id, grid.neighbor(x, y, z, dir)) {
                stats.culled_faces += 1;
                continue;
            }
            let quad = half_offsets(dir);
            let mut corner = [0u32; 4];
            for (slot, off) in corner.iter_mut().zip(quad) {
                *slot = sink.emit([center[0] + off[0], center[1] + off[1], center[2] + off[2]]);
            }
            indices.extend(QUAD_TRIANGLES.iter().map(|&local| corner[local]));
            if let Some(target) = colors.as_mut() {
                let rgba = target.palette.resolve(id);
                target.colors.extend_from_slice(&[rgba; 4]);
            }
            stats.faces += 1;
            stats.faces_by_direction[dir.index()] += 1;
        }
    }
}

/// Reusable mesher. Accumulators keep their capacity between passes.
///
/// The generator holds the geometry of its last pass until [`clear`] or the
/// next [`generate`]; the returned [`Mesh`] is an independent copy.
///
/// [`clear`]: MeshGenerator::clear
/// [`generate`]: MeshGenerator::generate
#[derive(Debug, Default)]
pub struct MeshGenerator {
    palette: Palette,
    append: AppendSink,
    dedup: DedupSink,
    indices: Vec<u32>,
    colors: Vec<Rgba>,
    stats: GenerateStats,
}

impl MeshGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Statistics of the last successful pass; zeroed by [`MeshGenerator::clear`].
    pub fn last_stats(&self) -> GenerateStats {
        self.stats
    }

    /// True when no geometry from a previous pass is held.
    pub fn is_clear(&self) -> bool {
        self.append.is_empty()
            && self.dedup.is_empty()
            && self.indices.is_empty()
            && self.colors.is_empty()
    }

    /// Drops all accumulated geometry. Never touches any grid.
    pub fn clear(&mut self) {
        self.append.reset();
        self.dedup.reset();
        self.indices.clear();
        self.colors.clear();
        self.stats = GenerateStats::default();
    }

    /// Meshes `grid`. Inputs are validated before anything is emitted, and
    /// on error the generator is left cleared.
    pub fn generate(&mut self, grid: &VoxelGrid, config: MeshConfig) -> Result<Mesh, MeshError> {
        self.clear();
        config.validate()?;
        let visible = count_visible_faces(grid);
        check_index_space(bound_for_faces(grid, &config, visible))?;

        let Self {
            palette,
            append,
            dedup,
            indices,
            colors,
            stats,
        } = self;
        indices.reserve(visible * 6);
        if config.assign_colors {
            colors.reserve(visible * 4);
        }
        if !config.dedup_vertices {
            append.reserve_faces(visible);
        }
        let target = if config.assign_colors {
            Some(ColorTarget {
                colors: &mut *colors,
                palette: &*palette,
            })
        } else {
            None
        };
        let sink: &dyn VertexSink = if config.dedup_vertices {
            emit_visible_faces(grid, dedup, indices, target, stats);
            dedup
        } else {
            emit_visible_faces(grid, append, indices, target, stats);
            append
        };

        stats.vertices = sink.len();
        stats.triangles = indices.len() / 3;
        let (sx, sy, sz) = grid.dims();
        log::debug!(
            target: "mesh",
            "grid {}x{}x{} dedup={} colors={}: {} faces ({} culled), {} vertices, {} triangles",
            sx,
            sy,
            sz,
            config.dedup_vertices,
            config.assign_colors,
            stats.faces,
            stats.culled_faces,
            stats.vertices,
            stats.triangles
        );

        Ok(Mesh::assemble(
            sink.vertices().to_vec(),
            indices.clone(),
            config.assign_colors.then(|| colors.clone()),
            stats.faces,
        ))
    }

    /// `clear` followed by `generate`.
    pub fn regenerate(&mut self, grid: &VoxelGrid, config: MeshConfig) -> Result<Mesh, MeshError> {
        self.clear();
        self.generate(grid, config)
    }
}

/// One-shot helper using a fresh generator and the default palette.
pub fn generate_mesh(grid: &VoxelGrid, config: MeshConfig) -> Result<Mesh, MeshError> {
    MeshGenerator::new().generate(grid, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(n: usize) -> VoxelGrid {
        VoxelGrid::from_cells(n, n, n, vec![1; n * n * n]).unwrap()
    }

    #[test]
    fn bound_follows_surface_not_volume() {
        let g = solid(40);
        assert_eq!(count_visible_faces(&g), 6 * 40 * 40);
        assert_eq!(vertex_upper_bound(&g, &MeshConfig::APPEND), 4 * 6 * 40 * 40);
        assert_eq!(vertex_upper_bound(&g, &MeshConfig::DEDUP), 4 * 6 * 40 * 40);
        // An interior hole adds its six inward faces.
        let mut hollow = g.clone();
        hollow.set(20, 20, 20, EMPTY);
        assert_eq!(count_visible_faces(&hollow), 6 * 40 * 40 + 6);
    }

    #[test]
    fn dedup_bound_capped_by_lattice() {
        let mut g = VoxelGrid::new(3, 3, 3).unwrap();
        for ((x, y, z), _) in VoxelGrid::new(3, 3, 3).unwrap().iter() {
            if (x + y + z) % 2 == 0 {
                g.set(x, y, z, 1);
            }
        }
        assert_eq!(count_visible_faces(&g), 14 * 6);
        assert_eq!(vertex_upper_bound(&g, &MeshConfig::APPEND), 14 * 24);
        assert_eq!(vertex_upper_bound(&g, &MeshConfig::DEDUP), 64);
    }

    #[test]
    fn index_space_is_exactly_u32() {
        let limit = u64::from(u32::MAX) + 1;
        assert_eq!(check_index_space(limit), Ok(()));
        assert_eq!(
            check_index_space(limit + 1),
            Err(MeshError::TooManyVertices { upper_bound: limit + 1 })
        );
        // A solid 565^3 block has over 179M voxels but only 7.6M surface vertices.
        let faces = 6 * 565 * 565;
        let g = VoxelGrid::new(1, 1, 1).unwrap();
        assert_eq!(check_index_space(bound_for_faces(&g, &MeshConfig::APPEND, faces)), Ok(()));
        assert!(565u64.pow(3) * 24 > limit);
    }

    #[test]
    #[ignore = "allocates a 565^3 grid"]
    fn large_solid_block_meshes() {
        let g = solid(565);
        let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
        assert_eq!(m.vertex_count(), 4 * 6 * 565 * 565);
    }
}
