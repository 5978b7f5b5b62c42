//! Plain-text grid persistence.
//!
//! The format is whitespace separated integers: `sx sy sz`, then
//! `sx * sy * sz` type ids in the same x-major, y-mid, z-minor order the
//! mesher traverses. `#` starts a comment that runs to the end of the line.
//! [`write_grid`] emits one line per `(x, y)` column and a blank line
//! between `x` layers, but any whitespace layout parses.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{GridError, VoxelGrid, VoxelType, checked_volume};

fn tokens(src: &str) -> impl Iterator<Item = &str> {
    src.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
}

fn parse_token<T: std::str::FromStr>(tok: &str, position: usize) -> Result<T, GridError> {
    tok.parse::<T>().map_err(|_| GridError::Parse {
        token: tok.to_string(),
        position,
    })
}

pub fn parse_grid(src: &str) -> Result<VoxelGrid, GridError> {
    let mut it = tokens(src).enumerate();
    let mut dim = || -> Result<usize, GridError> {
        let (pos, tok) = it.next().ok_or(GridError::MissingHeader)?;
        parse_token::<usize>(tok, pos)
    };
    let (sx, sy, sz) = (dim()?, dim()?, dim()?);
    let expected = checked_volume(sx, sy, sz)?;

    // Header is untrusted; grow past this as tokens arrive.
    let mut cells: Vec<VoxelType> = Vec::with_capacity(expected.min(1 << 20));
    for (pos, tok) in it {
        cells.push(parse_token::<VoxelType>(tok, pos)?);
    }
    let grid = VoxelGrid::from_cells(sx, sy, sz, cells)?;
    log::debug!(
        "parsed grid {}x{}x{} ({} occupied)",
        sx,
        sy,
        sz,
        grid.occupied_count()
    );
    Ok(grid)
}

pub fn write_grid(grid: &VoxelGrid, mut out: impl Write) -> std::io::Result<()> {
    let (sx, sy, sz) = grid.dims();
    writeln!(out, "{} {} {}", sx, sy, sz)?;
    for x in 0..sx {
        writeln!(out)?;
        for y in 0..sy {
            let start = grid.idx(x, y, 0);
            let column = &grid.cells()[start..start + sz];
            let mut first = true;
            for id in column {
                if !first {
                    write!(out, " ")?;
                }
                write!(out, "{}", id)?;
                first = false;
            }
            writeln!(out)?;
        }
    }
    out.flush()
}

pub fn load_grid(path: impl AsRef<Path>) -> Result<VoxelGrid, GridError> {
    let s = fs::read_to_string(path)?;
    parse_grid(&s)
}

pub fn save_grid(path: impl AsRef<Path>, grid: &VoxelGrid) -> Result<(), GridError> {
    let file = fs::File::create(path)?;
    write_grid(grid, BufWriter::new(file))?;
    Ok(())
}
