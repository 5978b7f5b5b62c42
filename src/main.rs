use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tessel_grid::{VoxelGrid, load_grid, save_grid};
use tessel_mesh::{MeshConfig, MeshGenerator};

mod cli;
mod config;

use cli::{Cli, Commands};
use config::{TesselConfig, load_config_from_path};

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => TesselConfig::default(),
    };

    match cli.command {
        Commands::Mesh {
            grid,
            fill,
            dedup,
            colors,
            obj,
        } => {
            let voxels = match grid {
                Some(path) => load_grid(&path)?,
                None => fill.apply(&cfg.fill).build()?,
            };
            let mut mesh_cfg = cfg.mesh;
            mesh_cfg.dedup_vertices |= dedup;
            mesh_cfg.assign_colors |= colors;
            run_mesh(&voxels, mesh_cfg, &cfg, obj.as_deref())?;
        }
        Commands::Fill { out, fill } => {
            let params = fill.apply(&cfg.fill);
            let voxels = params.build()?;
            save_grid(&out, &voxels)?;
            log::info!(
                "wrote {:?} grid {:?} ({} occupied) to {}",
                params.mode,
                voxels.dims(),
                voxels.occupied_count(),
                out.display()
            );
        }
        Commands::Stats { grid } => {
            let voxels = load_grid(&grid)?;
            print_stats(&voxels)?;
        }
    }
    Ok(())
}

fn run_mesh(
    voxels: &VoxelGrid,
    mesh_cfg: MeshConfig,
    cfg: &TesselConfig,
    obj: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut mesher = MeshGenerator::with_palette(cfg.palette()?);
    let mesh = mesher.generate(voxels, mesh_cfg)?;
    let stats = mesher.last_stats();
    log::info!(
        "meshed {:?}: {} faces, {} vertices, {} triangles",
        voxels.dims(),
        stats.faces,
        stats.vertices,
        stats.triangles
    );
    if let Some(bb) = mesh.bounds() {
        log::info!("bounds {:?} .. {:?}", bb.min.to_array(), bb.max.to_array());
    }
    if let Some(path) = obj {
        let out = BufWriter::new(File::create(path)?);
        mesh.write_obj(out)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn print_stats(voxels: &VoxelGrid) -> Result<(), Box<dyn Error>> {
    let (sx, sy, sz) = voxels.dims();
    println!("dims       {} x {} x {} ({} cells)", sx, sy, sz, voxels.len());
    println!("occupied   {}", voxels.occupied_count());
    let mut mesher = MeshGenerator::new();
    for config in MeshConfig::VALID {
        mesher.generate(voxels, config)?;
        let s = mesher.last_stats();
        println!(
            "dedup={:<5} colors={:<5} faces={} culled={} vertices={} triangles={}",
            config.dedup_vertices,
            config.assign_colors,
            s.faces,
            s.culled_faces,
            s.vertices,
            s.triangles
        );
    }
    Ok(())
}
