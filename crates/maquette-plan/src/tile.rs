use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Tiling metadata for one texture: the tile's physical size in world
/// units and how often it repeats across that size. Supplied by the
/// external resource subsystem; consumed for UV scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileInfo {
    pub world_w: f32,
    pub world_h: f32,
    pub repeat_u: f32,
    pub repeat_v: f32,
}

impl Default for TileInfo {
    /// 1x1 world-unit tile repeating once: the missing-texture fallback
    /// that keeps UV scale factors at 1:1.
    fn default() -> Self {
        Self {
            world_w: 1.0,
            world_h: 1.0,
            repeat_u: 1.0,
            repeat_v: 1.0,
        }
    }
}

/// Boundary to the texture/resource collaborator: resolve a structure's
/// material reference to tiling metadata.
pub trait TileProvider {
    fn tile(&self, material: Option<&str>) -> TileInfo;
}

/// Keyed tile catalog loaded from TOML. Unknown keys fall back to the
/// default 1:1 tile with a warning.
#[derive(Default, Clone, Debug)]
pub struct TileCatalog {
    tiles: HashMap<String, TileInfo>,
}

impl TileCatalog {
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, info: TileInfo) {
        self.tiles.insert(key.into(), info);
    }

    pub fn get(&self, key: &str) -> Option<TileInfo> {
        self.tiles.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TilesConfig = toml::from_str(toml_str)?;
        let mut catalog = TileCatalog::new();
        for (key, entry) in cfg.tiles {
            catalog.tiles.insert(
                key,
                TileInfo {
                    world_w: entry.world_w,
                    world_h: entry.world_h,
                    repeat_u: entry.repeat_u,
                    repeat_v: entry.repeat_v,
                },
            );
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

impl TileProvider for TileCatalog {
    fn tile(&self, material: Option<&str>) -> TileInfo {
        match material {
            None => TileInfo::default(),
            Some(key) => self.get(key).unwrap_or_else(|| {
                log::warn!("no tile metadata for material '{}', using 1:1 fallback", key);
                TileInfo::default()
            }),
        }
    }
}

// --- Config ---

#[derive(Deserialize)]
struct TilesConfig {
    #[serde(default)]
    tiles: HashMap<String, TileEntry>,
}

#[derive(Deserialize)]
struct TileEntry {
    world_w: f32,
    world_h: f32,
    #[serde(default = "one")]
    repeat_u: f32,
    #[serde(default = "one")]
    repeat_v: f32,
}

fn one() -> f32 {
    1.0
}
