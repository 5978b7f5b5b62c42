use tessel_grid::{EMPTY, VoxelType};

/// A face of `own` is emitted only when the cell across it is empty.
///
/// Two touching voxels of different materials hide the face between them;
/// material boundaries inside a solid produce no geometry.
#[inline]
pub fn is_visible(own: VoxelType, neighbor: VoxelType) -> bool {
    own != EMPTY && neighbor == EMPTY
}
