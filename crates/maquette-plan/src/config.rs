//! TOML deserialization for floor plans.

use std::error::Error;
use std::fs;
use std::path::Path;

use maquette_geom::Vec2;
use serde::Deserialize;

use crate::types::{Bounds, FloorPlan, Shape, Structure, StructureKind};

#[derive(Deserialize)]
struct PlanConfig {
    #[serde(default = "default_ceiling")]
    ceiling: f32,
    #[serde(default = "default_world_scale")]
    world_scale: f32,
    wall_texture: Option<String>,
    floor_texture: Option<String>,
    #[serde(default)]
    structures: Vec<StructureConfig>,
}

#[derive(Deserialize)]
struct StructureConfig {
    id: String,
    shape: ShapeCfg,
    kind: KindCfg,
    #[serde(default)]
    bounds: BoundsCfg,
    #[serde(default)]
    points: Vec<[f32; 2]>,
    #[serde(default)]
    raised: bool,
    #[serde(default)]
    block_height: Option<f32>,
    #[serde(default)]
    material: Option<String>,
}

#[derive(Deserialize, Copy, Clone)]
#[serde(rename_all = "lowercase")]
enum ShapeCfg {
    Rect,
    Circle,
    Polygon,
}

#[derive(Deserialize, Copy, Clone)]
#[serde(rename_all = "lowercase")]
enum KindCfg {
    Room,
    Wall,
}

#[derive(Deserialize, Default, Copy, Clone)]
struct BoundsCfg {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    w: f32,
    #[serde(default)]
    h: f32,
}

fn default_ceiling() -> f32 {
    FloorPlan::DEFAULT_CEILING
}

fn default_world_scale() -> f32 {
    FloorPlan::DEFAULT_WORLD_SCALE
}

impl FloorPlan {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PlanConfig = toml::from_str(toml_str)?;
        let mut structures = Vec::with_capacity(cfg.structures.len());
        for sc in cfg.structures {
            let shape = match sc.shape {
                ShapeCfg::Rect => Shape::Rectangle,
                ShapeCfg::Circle => Shape::Circle,
                ShapeCfg::Polygon => Shape::Polygon,
            };
            let kind = match sc.kind {
                KindCfg::Room => StructureKind::Room,
                KindCfg::Wall => StructureKind::Wall,
            };
            let mut bounds = Bounds::new(sc.bounds.x, sc.bounds.y, sc.bounds.w, sc.bounds.h);
            let points: Vec<Vec2> = sc.points.iter().map(|p| Vec2::new(p[0], p[1])).collect();
            if shape == Shape::Polygon && !points.is_empty() {
                bounds = polygon_bounds(&points);
            }
            // Free-form slider heights snap onto the step grid here, once.
            let block_height = if sc.raised {
                crate::quantize_height(sc.block_height.unwrap_or(crate::STEP_UNIT))
            } else {
                0.0
            };
            structures.push(Structure {
                id: sc.id,
                shape,
                bounds,
                points,
                kind,
                raised: sc.raised,
                block_height,
                material: sc.material,
            });
        }
        Ok(FloorPlan {
            structures,
            ceiling: cfg.ceiling,
            world_scale: cfg.world_scale,
            wall_texture_id: cfg.wall_texture,
            floor_texture_id: cfg.floor_texture,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn polygon_bounds(points: &[Vec2]) -> Bounds {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Bounds::new(min.x, min.y, max.x - min.x, max.y - min.y)
}
