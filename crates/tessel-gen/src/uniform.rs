use tessel_grid::{EMPTY, GridError, VoxelGrid, VoxelType};

use crate::Uniform;

/// Occupies each cell independently with probability `density`, picking a
/// type uniformly from `min_type..=max_type`.
///
/// A zero `min_type` is raised to 1 and an inverted range collapses to
/// `min_type`, so every placed voxel is non-empty.
pub fn fill_uniform(
    dims: (usize, usize, usize),
    seed: u64,
    settings: &Uniform,
) -> Result<VoxelGrid, GridError> {
    let (sx, sy, sz) = dims;
    let mut grid = VoxelGrid::new(sx, sy, sz)?;
    let lo = settings.min_type.max(1);
    let hi = settings.max_type.max(lo);
    let density = settings.density.clamp(0.0, 1.0);

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut placed = 0usize;
    for x in 0..sx {
        for y in 0..sy {
            for z in 0..sz {
                // Draw both values every cell so the pattern does not shift
                // when only the type range changes.
                let roll = rng.f32();
                let id: VoxelType = rng.u16(lo..=hi);
                if roll < density {
                    grid.set(x, y, z, id);
                    placed += 1;
                }
            }
        }
    }
    debug_assert!(grid.cells().iter().all(|&c| c == EMPTY || (lo..=hi).contains(&c)));
    log::debug!(
        "uniform fill {}x{}x{} seed={} density={:.2}: {} voxels",
        sx,
        sy,
        sz,
        seed,
        density,
        placed
    );
    Ok(grid)
}
