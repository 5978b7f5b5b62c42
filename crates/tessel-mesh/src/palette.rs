use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tessel_grid::VoxelType;

pub type Rgba = [u8; 4];

pub const WHITE: Rgba = [255, 255, 255, 255];

/// Per-type vertex colors for the append policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<VoxelType, Rgba>,
    /// Used for occupied types with no entry so the color list stays
    /// parallel to the vertex list.
    fallback: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(1, [90, 170, 70, 255]);
        colors.insert(2, [130, 90, 60, 255]);
        Self {
            colors,
            fallback: WHITE,
        }
    }
}

impl Palette {
    /// A palette with no entries; every type resolves to `fallback`.
    pub fn empty(fallback: Rgba) -> Self {
        Self {
            colors: BTreeMap::new(),
            fallback,
        }
    }

    pub fn with_color(mut self, id: VoxelType, rgba: Rgba) -> Self {
        self.colors.insert(id, rgba);
        self
    }

    #[inline]
    pub fn color_for(&self, id: VoxelType) -> Option<Rgba> {
        self.colors.get(&id).copied()
    }

    #[inline]
    pub fn resolve(&self, id: VoxelType) -> Rgba {
        self.color_for(id).unwrap_or(self.fallback)
    }

    #[inline]
    pub fn fallback(&self) -> Rgba {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn from_config(cfg: &PaletteConfig) -> Result<Self, Box<dyn Error>> {
        let mut palette = Palette::empty(cfg.fallback.unwrap_or(WHITE));
        for (key, rgba) in &cfg.colors {
            let id: VoxelType = key
                .trim()
                .parse()
                .map_err(|_| format!("palette key {:?} is not a voxel type id", key))?;
            if id == 0 {
                log::warn!("palette entry for type 0 ignored; empty cells are never drawn");
                continue;
            }
            palette.colors.insert(id, *rgba);
        }
        Ok(palette)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        Self::from_config(&cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

/// ```toml
/// fallback = [255, 255, 255, 255]
///
/// [colors]
/// 1 = [90, 170, 70, 255]
/// 2 = [130, 90, 60, 255]
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub fallback: Option<Rgba>,
    #[serde(default)]
    pub colors: BTreeMap<String, Rgba>,
}
