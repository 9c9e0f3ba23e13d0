//! Collision world: the navigation-relevant projection of a floor plan,
//! queried by eager raycasts against an immutable snapshot.
#![forbid(unsafe_code)]

pub mod ray;

use maquette_geom::{Rect2, Vec2, Vec3};
use maquette_plan::{FloorPlan, STEP_UNIT, Shape, Structure, StructureId};

/// Tolerance for comparing step-quantized heights.
pub const HEIGHT_EPS: f32 = 1e-4;

/// 2D silhouette of a collidable structure in world XZ coordinates.
#[derive(Clone, Debug)]
pub enum Footprint {
    Rect(Rect2),
    Circle { center: Vec2, radius: f32 },
    Polygon(Vec<Vec2>),
}

impl Footprint {
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Footprint::Rect(r) => r.contains(p),
            Footprint::Circle { center, radius } => {
                (p - *center).length_sq() <= radius * radius
            }
            Footprint::Polygon(pts) => ray::point_in_polygon(p, pts),
        }
    }

    pub fn ray_hit(&self, origin: Vec2, dir: Vec2, max_dist: f32) -> Option<f32> {
        match self {
            Footprint::Rect(r) => ray::ray_rect(origin, dir, max_dist, *r),
            Footprint::Circle { center, radius } => {
                ray::ray_circle(origin, dir, max_dist, *center, *radius)
            }
            Footprint::Polygon(pts) => ray::ray_polygon(origin, dir, max_dist, pts),
        }
    }
}

/// One collidable structure as the physics sees it: silhouette, top
/// surface height, and the wall/raised-block tags.
#[derive(Clone, Debug)]
pub struct NavEntry {
    pub id: StructureId,
    pub footprint: Footprint,
    /// Height of the top surface in world units.
    pub top: f32,
    pub is_wall: bool,
    /// 0.0 encodes a full-height wall; positive values are raised-block
    /// top surfaces an avatar may stand on.
    pub block_height: f32,
}

impl NavEntry {
    /// Derives the nav projection of a structure, or `None` when it is
    /// not collidable (rooms) or has no usable silhouette. The degeneracy
    /// rules match the mesh builder's, so a structure that produces no
    /// geometry never collides either.
    pub fn from_structure(s: &Structure, world_scale: f32, ceiling: f32) -> Option<Self> {
        if !s.collidable() {
            return None;
        }
        let footprint = match s.shape {
            Shape::Rectangle => {
                let rect = s.bounds.world_rect(world_scale);
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return None;
                }
                Footprint::Rect(rect)
            }
            Shape::Circle => {
                let rect = s.bounds.world_rect(world_scale);
                let radius = rect.width().max(rect.height()) * 0.5;
                if radius <= 0.0 {
                    return None;
                }
                Footprint::Circle {
                    center: rect.center(),
                    radius,
                }
            }
            Shape::Polygon => {
                if s.points.len() < 3 {
                    return None;
                }
                Footprint::Polygon(s.points_world(world_scale))
            }
        };
        let block_height = s.nav_block_height();
        let top = if s.raised { s.block_height } else { ceiling };
        Some(Self {
            id: s.id.clone(),
            footprint,
            top,
            is_wall: true,
            block_height,
        })
    }
}

/// Nearest forward obstruction.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardHit {
    /// Ray parameter (world units along the normalized direction).
    pub t: f32,
    pub block_height: f32,
    pub id: StructureId,
}

/// Immutable per-revision snapshot of all nav entries. Rebuilt wholesale
/// when the plan changes; physics ticks only ever see one snapshot.
#[derive(Clone, Debug, Default)]
pub struct NavWorld {
    entries: Vec<NavEntry>,
}

impl NavWorld {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Convenience snapshot straight from a plan (texture-source markers
    /// excluded, like the scene assembler does).
    pub fn from_plan(plan: &FloorPlan) -> Self {
        let entries = plan
            .structures
            .iter()
            .filter(|s| !plan.is_texture_source(&s.id))
            .filter_map(|s| NavEntry::from_structure(s, plan.world_scale, plan.ceiling))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Horizontal obstruction query. Every entry spans the full `[0, top]`
    /// column, so a blocking entry obstructs at any standing height up to
    /// its top; a full wall still registers when the avatar stands on a
    /// raised block above the wall's base. Only entries that cannot be
    /// stepped onto participate: solid walls (`block_height == 0`) and
    /// blocks more than one step unit above the current ground. Nearest
    /// hit wins.
    pub fn forward(
        &self,
        origin: Vec3,
        dir: Vec2,
        max_dist: f32,
        current_ground: f32,
    ) -> Option<ForwardHit> {
        let dir = dir.normalized();
        if dir.length_sq() == 0.0 {
            return None;
        }
        let origin2 = origin.plane();
        let mut best: Option<ForwardHit> = None;
        for e in &self.entries {
            // walls always obstruct; raised blocks obstruct once they sit
            // a full step or more above the current ground (the exact
            // one-step case is the controller's step-up)
            let blocking = e.block_height == 0.0
                || e.block_height - current_ground > STEP_UNIT - HEIGHT_EPS;
            if !blocking {
                continue;
            }
            if let Some(t) = e.footprint.ray_hit(origin2, dir, max_dist) {
                if best.as_ref().map_or(true, |b| t < b.t) {
                    best = Some(ForwardHit {
                        t,
                        block_height: e.block_height,
                        id: e.id.clone(),
                    });
                }
            }
        }
        best
    }

    /// Ground query: the highest standable surface under `pos`, looking
    /// down at most `max_dist`. Surfaces above the cast origin are
    /// ignored. No hit means absolute ground: 0.0.
    pub fn down(&self, pos: Vec3, max_dist: f32) -> f32 {
        let p = pos.plane();
        let mut best = 0.0f32;
        for e in &self.entries {
            if e.top > pos.y + HEIGHT_EPS {
                continue;
            }
            if pos.y - e.top > max_dist {
                continue;
            }
            if e.footprint.contains(p) && e.top > best {
                best = e.top;
            }
        }
        best
    }
}
