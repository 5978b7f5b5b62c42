//! Grid population helpers: seeded random fill and heightmap terrain.
//!
//! Both fills are pure functions of their parameters; the same seed always
//! yields the same grid.

use serde::{Deserialize, Serialize};
use tessel_grid::{GridError, VoxelGrid, VoxelType};

mod terrain;
mod uniform;

pub use terrain::fill_terrain;
pub use uniform::fill_uniform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Uniform,
    Terrain,
}

impl std::str::FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(FillMode::Uniform),
            "terrain" => Ok(FillMode::Terrain),
            other => Err(format!("unknown fill mode '{}' (expected uniform or terrain)", other)),
        }
    }
}

/// Settings for [`fill_uniform`]. Types are drawn from `min_type..=max_type`.
///
/// The default leaves a third of the cells empty and splits the rest evenly
/// between types 1 and 2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Uniform {
    /// Probability that a cell is occupied, clamped to `[0, 1]`.
    pub density: f32,
    pub min_type: VoxelType,
    pub max_type: VoxelType,
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            density: 2.0 / 3.0,
            min_type: 1,
            max_type: 2,
        }
    }
}

/// Settings for [`fill_terrain`]. Heights are fractions of the grid's `y` size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Terrain {
    pub frequency: f32,
    pub base_height: f32,
    pub amplitude: f32,
    /// Type of the topmost voxel in each column.
    pub surface_type: VoxelType,
    pub subsurface_type: VoxelType,
}

impl Default for Terrain {
    fn default() -> Self {
        Self {
            frequency: 0.05,
            base_height: 0.45,
            amplitude: 0.3,
            surface_type: 1,
            subsurface_type: 2,
        }
    }
}

/// The `[fill]` section of the driver config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillParams {
    pub mode: FillMode,
    pub size: [usize; 3],
    pub seed: u64,
    pub uniform: Uniform,
    pub terrain: Terrain,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            mode: FillMode::Uniform,
            size: [16, 21, 16],
            seed: 1337,
            uniform: Uniform::default(),
            terrain: Terrain::default(),
        }
    }
}

impl FillParams {
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.size[0], self.size[1], self.size[2])
    }

    /// Builds a grid with the selected fill mode.
    pub fn build(&self) -> Result<VoxelGrid, GridError> {
        match self.mode {
            FillMode::Uniform => fill_uniform(self.dims(), self.seed, &self.uniform),
            FillMode::Terrain => fill_terrain(self.dims(), self.seed, &self.terrain),
        }
    }
}
