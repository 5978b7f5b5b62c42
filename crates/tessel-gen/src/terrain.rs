use fastnoise_lite::{FastNoiseLite, NoiseType};
use tessel_grid::{GridError, VoxelGrid};

use crate::Terrain;

/// Column height at `(x, z)`, in voxels, clamped to `[0, sy]`.
fn column_height(noise: &FastNoiseLite, x: usize, z: usize, sy: usize, t: &Terrain) -> usize {
    let n = noise.get_noise_2d(x as f32, z as f32);
    let h = (t.base_height + n * t.amplitude) * sy as f32;
    h.round().clamp(0.0, sy as f32) as usize
}

/// Fills a heightmap: every `(x, z)` column is solid from `y = 0` up to a
/// noise-driven height, with `surface_type` on top and `subsurface_type`
/// beneath. `y` is up.
pub fn fill_terrain(
    dims: (usize, usize, usize),
    seed: u64,
    settings: &Terrain,
) -> Result<VoxelGrid, GridError> {
    let (sx, sy, sz) = dims;
    let mut grid = VoxelGrid::new(sx, sy, sz)?;
    let mut noise = FastNoiseLite::with_seed(seed as i32);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(settings.frequency));

    let surface = settings.surface_type.max(1);
    let below = settings.subsurface_type.max(1);
    let mut highest = 0usize;
    for x in 0..sx {
        for z in 0..sz {
            let h = column_height(&noise, x, z, sy, settings);
            highest = highest.max(h);
            for y in 0..h {
                grid.set(x, y, z, if y + 1 == h { surface } else { below });
            }
        }
    }
    log::debug!(
        "terrain fill {}x{}x{} seed={}: peak {} of {}",
        sx,
        sy,
        sz,
        seed,
        highest,
        sy
    );
    Ok(grid)
}
