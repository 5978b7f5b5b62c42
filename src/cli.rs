use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tessel_gen::{FillMode, FillParams};

#[derive(Parser, Debug)]
#[command(name = "tessel")]
#[command(about = "Turns voxel grids into triangle meshes", long_about = None)]
pub struct Cli {
    /// TOML config with [mesh], [fill] and [palette] sections. Flags override it.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mesh a grid file or a generated grid
    Mesh {
        /// Grid in the text format. Without it a grid is generated.
        #[arg(short, long, conflicts_with = "mode")]
        grid: Option<PathBuf>,

        #[command(flatten)]
        fill: FillArgs,

        /// Share vertices between faces meeting at a corner
        #[arg(long)]
        dedup: bool,

        /// Attach palette colors to every vertex
        #[arg(long)]
        colors: bool,

        /// Write the mesh as Wavefront OBJ
        #[arg(long, value_name = "OUT")]
        obj: Option<PathBuf>,
    },
    /// Generate a grid and save it in the text format
    Fill {
        #[arg(short, long)]
        out: PathBuf,

        #[command(flatten)]
        fill: FillArgs,
    },
    /// Print occupancy and face counts for a grid file
    Stats {
        #[arg(short, long)]
        grid: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct FillArgs {
    /// Fill mode: uniform or terrain
    #[arg(long = "fill", value_name = "MODE")]
    pub mode: Option<FillMode>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"])]
    pub size: Option<Vec<usize>>,
}

impl FillArgs {
    /// Applies any flags given on the command line on top of `base`.
    pub fn apply(&self, base: &FillParams) -> FillParams {
        let mut params = base.clone();
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some([x, y, z]) = self.size.as_deref() {
            params.size = [*x, *y, *z];
        }
        params
    }
}
