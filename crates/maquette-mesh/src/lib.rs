//! Procedural mesh synthesis: one floor-plan structure in, one set of
//! renderable vertex buffers out.
#![forbid(unsafe_code)]

pub mod build;
pub mod mesh_build;

pub use build::CIRCLE_SEGMENTS;
pub use mesh_build::{MaterialGroup, MaterialSlot, MeshBuild};

use maquette_plan::{FloorPlan, Shape, Structure, StructureKind, TileProvider};

/// Plan-wide parameters the builders need.
#[derive(Copy, Clone, Debug)]
pub struct BuildCtx {
    pub ceiling: f32,
    pub world_scale: f32,
}

impl BuildCtx {
    pub fn from_plan(plan: &FloorPlan) -> Self {
        Self {
            ceiling: plan.ceiling,
            world_scale: plan.world_scale,
        }
    }
}

/// A built mesh plus the navigation tags the collision world consumes.
pub struct BuiltMesh {
    pub mesh: MeshBuild,
    pub is_wall: bool,
    /// 0.0 for full-height walls, the top surface height for raised blocks.
    pub block_height: f32,
}

/// Builds the mesh for one structure. Returns `None` for degenerate input
/// (under-specified polygons, zero-area bounds) instead of panicking; the
/// caller decides whether that is worth reporting.
///
/// Dispatches over `(shape, kind, raised)`; `raised` takes precedence over
/// the room/wall distinction since a raised block is solid either way.
pub fn build_structure(
    s: &Structure,
    ctx: &BuildCtx,
    tiles: &dyn TileProvider,
) -> Option<BuiltMesh> {
    let tile = tiles.tile(s.material.as_deref());
    let rect = s.bounds.world_rect(ctx.world_scale);

    let mesh = match s.shape {
        Shape::Rectangle => {
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                log::warn!("structure '{}': zero-area rectangle, skipping", s.id);
                return None;
            }
            match (s.kind, s.raised) {
                (_, true) => build::rect_block(rect, s.block_height, &tile),
                (StructureKind::Wall, false) => build::rect_solid(rect, ctx.ceiling, &tile),
                (StructureKind::Room, false) => build::rect_shell(rect, ctx.ceiling, &tile),
            }
        }
        Shape::Circle => {
            let radius = rect.width().max(rect.height()) * 0.5;
            if radius <= 0.0 {
                log::warn!("structure '{}': zero-radius circle, skipping", s.id);
                return None;
            }
            let center = rect.center();
            match (s.kind, s.raised) {
                (_, true) => build::circle_block(center, radius, s.block_height, &tile),
                (StructureKind::Wall, false) => {
                    build::circle_solid(center, radius, ctx.ceiling, &tile)
                }
                (StructureKind::Room, false) => {
                    build::circle_shell(center, radius, ctx.ceiling, &tile)
                }
            }
        }
        Shape::Polygon => {
            if s.points.len() < 3 {
                log::warn!(
                    "structure '{}': polygon with {} point(s), skipping",
                    s.id,
                    s.points.len()
                );
                return None;
            }
            let pts = s.points_world(ctx.world_scale);
            match (s.kind, s.raised) {
                (_, true) => build::polygon_block(&pts, rect, s.block_height, &tile),
                (StructureKind::Wall, false) => build::polygon_walls(&pts, ctx.ceiling, &tile),
                (StructureKind::Room, false) => build::polygon_shell(&pts, ctx.ceiling, &tile),
            }
        }
    };

    Some(BuiltMesh {
        mesh,
        is_wall: s.collidable(),
        block_height: s.nav_block_height(),
    })
}
