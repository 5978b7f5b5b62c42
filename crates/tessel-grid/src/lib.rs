//! Dense voxel grid, face directions, and the grid text format.
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod text;

pub use direction::Direction;
pub use error::GridError;
pub use text::{load_grid, parse_grid, save_grid, write_grid};

/// Voxel type id. `0` is empty; any other value is a material.
pub type VoxelType = u16;

pub const EMPTY: VoxelType = 0;

/// Longest supported axis. Corner coordinates are `integer ± 0.5`, and
/// keeping every axis below this keeps them exact in `f32`.
pub const MAX_AXIS_LEN: usize = 1 << 22;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    sx: usize,
    sy: usize,
    sz: usize,
    cells: Vec<VoxelType>,
}

pub(crate) fn checked_volume(sx: usize, sy: usize, sz: usize) -> Result<usize, GridError> {
    let too_large = GridError::TooLarge { dims: (sx, sy, sz) };
    if sx > MAX_AXIS_LEN || sy > MAX_AXIS_LEN || sz > MAX_AXIS_LEN {
        return Err(too_large);
    }
    sx.checked_mul(sy)
        .and_then(|v| v.checked_mul(sz))
        .ok_or(too_large)
}

impl VoxelGrid {
    /// An all-empty grid.
    pub fn new(sx: usize, sy: usize, sz: usize) -> Result<Self, GridError> {
        let n = checked_volume(sx, sy, sz)?;
        Ok(Self {
            sx,
            sy,
            sz,
            cells: vec![EMPTY; n],
        })
    }

    /// Wraps linear storage in x-major, y-mid, z-minor order.
    pub fn from_cells(
        sx: usize,
        sy: usize,
        sz: usize,
        cells: Vec<VoxelType>,
    ) -> Result<Self, GridError> {
        let expected = checked_volume(sx, sy, sz)?;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { sx, sy, sz, cells })
    }

    /// Builds a grid from `layers[x][y][z]`, rejecting ragged input.
    pub fn from_nested(layers: &[Vec<Vec<VoxelType>>]) -> Result<Self, GridError> {
        let sx = layers.len();
        let sy = layers.first().map_or(0, |l| l.len());
        let sz = layers
            .first()
            .and_then(|l| l.first())
            .map_or(0, |col| col.len());
        let mut cells = Vec::with_capacity(checked_volume(sx, sy, sz)?);
        for (x, layer) in layers.iter().enumerate() {
            if layer.len() != sy {
                return Err(GridError::NonRectangular {
                    at: (x, 0),
                    expected: sy,
                    actual: layer.len(),
                });
            }
            for (y, col) in layer.iter().enumerate() {
                if col.len() != sz {
                    return Err(GridError::NonRectangular {
                        at: (x, y),
                        expected: sz,
                        actual: col.len(),
                    });
                }
                cells.extend_from_slice(col);
            }
        }
        Self::from_cells(sx, sy, sz, cells)
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    /// Number of cells, `sx * sy * sz`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has zero cells (some dimension is 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[VoxelType] {
        &self.cells
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.sy + y) * self.sz + z
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64, z: i64) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u64) < self.sx as u64
            && (y as u64) < self.sy as u64
            && (z as u64) < self.sz as u64
    }

    /// Type id at `(x,y,z)`.
    ///
    /// # Panics
    /// If the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> VoxelType {
        assert!(
            x < self.sx && y < self.sy && z < self.sz,
            "voxel ({}, {}, {}) outside grid {}x{}x{}",
            x,
            y,
            z,
            self.sx,
            self.sy,
            self.sz
        );
        self.cells[self.idx(x, y, z)]
    }

    #[inline]
    pub fn try_get(&self, x: usize, y: usize, z: usize) -> Option<VoxelType> {
        if x < self.sx && y < self.sy && z < self.sz {
            Some(self.cells[self.idx(x, y, z)])
        } else {
            None
        }
    }

    /// Type id of the cell across `dir` from `(x,y,z)`; anything outside the
    /// grid reads as [`EMPTY`].
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, z: usize, dir: Direction) -> VoxelType {
        let (dx, dy, dz) = dir.delta();
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        let nz = z as i64 + dz as i64;
        if self.contains(nx, ny, nz) {
            self.cells[self.idx(nx as usize, ny as usize, nz as usize)]
        } else {
            EMPTY
        }
    }

    /// Writes a cell. Used by fill helpers and fixtures, never by the mesher.
    ///
    /// # Panics
    /// If the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: VoxelType) {
        assert!(
            x < self.sx && y < self.sy && z < self.sz,
            "voxel ({}, {}, {}) outside grid {}x{}x{}",
            x,
            y,
            z,
            self.sx,
            self.sy,
            self.sz
        );
        let i = self.idx(x, y, z);
        self.cells[i] = id;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != EMPTY).count()
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == EMPTY)
    }

    /// Iterates `((x,y,z), id)` in storage order: `x` outer, `y` middle, `z` inner.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), VoxelType)> + '_ {
        let (sy, sz) = (self.sy, self.sz);
        self.cells.iter().enumerate().map(move |(i, &id)| {
            let z = i % sz;
            let y = (i / sz) % sy;
            let x = i / (sy * sz);
            ((x, y, z), id)
        })
    }
}
