//! Driver configuration file.
//!
//! ```toml
//! [mesh]
//! dedup_vertices = false
//! assign_colors = true
//!
//! [fill]
//! mode = "terrain"
//! size = [32, 24, 32]
//! seed = 7
//!
//! [palette]
//! fallback = [200, 200, 200, 255]
//! [palette.colors]
//! 1 = [90, 170, 70, 255]
//! ```

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use tessel_gen::FillParams;
use tessel_mesh::{MeshConfig, Palette, PaletteConfig};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TesselConfig {
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub fill: FillParams,
    /// Absent means the built-in palette.
    #[serde(default)]
    pub palette: Option<PaletteConfig>,
}

impl TesselConfig {
    pub fn palette(&self) -> Result<Palette, Box<dyn Error>> {
        match &self.palette {
            Some(cfg) => Palette::from_config(cfg),
            None => Ok(Palette::default()),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<TesselConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: TesselConfig = toml::from_str(&s)?;
    log::info!("loaded config {}", path.display());
    Ok(cfg)
}
