use maquette_geom::{Rect2, Vec2};

pub type StructureId = String;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    Rectangle,
    Circle,
    Polygon,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StructureKind {
    /// Thin hollow perimeter shell, decorative and non-collidable.
    Room,
    /// Solid collidable geometry.
    Wall,
}

/// Placement/extent box in 2D map units. For polygons this is the
/// bounding box of `points`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounds rectangle scaled into world XZ units.
    #[inline]
    pub fn world_rect(&self, world_scale: f32) -> Rect2 {
        Rect2::new(
            Vec2::new(self.x * world_scale, self.y * world_scale),
            Vec2::new(
                (self.x + self.w) * world_scale,
                (self.y + self.h) * world_scale,
            ),
        )
    }
}

/// One room or wall region of the floor plan. Immutable input to the
/// geometry builder; nothing downstream mutates it.
#[derive(Clone, Debug)]
pub struct Structure {
    pub id: StructureId,
    pub shape: Shape,
    pub bounds: Bounds,
    /// Ordered outline vertices in map units; only meaningful for
    /// `Shape::Polygon` and required to have >= 3 entries to mesh.
    pub points: Vec<Vec2>,
    pub kind: StructureKind,
    /// Partial-height solid block (half-wall / furniture) instead of a
    /// full floor-to-ceiling wall.
    pub raised: bool,
    /// Height in world units; meaningful only when `raised`. Quantized
    /// to [`crate::STEP_UNIT`] multiples at load.
    pub block_height: f32,
    /// Key into the external texture/material subsystem; `None` means
    /// the default material.
    pub material: Option<String>,
}

impl Structure {
    /// Collidable structures contribute nav entries: solid walls and
    /// raised blocks. Rooms never do.
    #[inline]
    pub fn collidable(&self) -> bool {
        self.kind == StructureKind::Wall || self.raised
    }

    /// The nav-facing block height: 0.0 encodes "full-height wall",
    /// anything positive is a raised block's top surface.
    #[inline]
    pub fn nav_block_height(&self) -> f32 {
        if self.raised { self.block_height } else { 0.0 }
    }

    /// Polygon outline scaled into world XZ units.
    pub fn points_world(&self, world_scale: f32) -> Vec<Vec2> {
        self.points.iter().map(|p| *p * world_scale).collect()
    }
}

/// The whole floor plan: structure list plus the global geometry
/// parameters shared by meshing and navigation.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    pub structures: Vec<Structure>,
    /// Full wall height in world units.
    pub ceiling: f32,
    /// World units per map unit (plans are typically authored in pixels).
    pub world_scale: f32,
    /// Texture-source markers: consulted as pixel sources for tiling,
    /// never meshed.
    pub wall_texture_id: Option<StructureId>,
    pub floor_texture_id: Option<StructureId>,
}

impl FloorPlan {
    pub const DEFAULT_CEILING: f32 = 4.5;
    pub const DEFAULT_WORLD_SCALE: f32 = 0.05;

    pub fn new(structures: Vec<Structure>) -> Self {
        Self {
            structures,
            ceiling: Self::DEFAULT_CEILING,
            world_scale: Self::DEFAULT_WORLD_SCALE,
            wall_texture_id: None,
            floor_texture_id: None,
        }
    }

    /// True for the two marker structures that only exist as texture
    /// sample sources.
    pub fn is_texture_source(&self, id: &str) -> bool {
        self.wall_texture_id.as_deref() == Some(id) || self.floor_texture_id.as_deref() == Some(id)
    }
}
