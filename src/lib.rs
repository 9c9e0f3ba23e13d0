//! Floor-plan to walkable 3D geometry: mesh synthesis, collision
//! snapshot, and locomotion, tied together by the scene assembler.
#![forbid(unsafe_code)]

pub mod scene;

pub use maquette_geom::{Aabb, Rect2, Vec2, Vec3};
pub use maquette_mesh::{BuildCtx, BuiltMesh, MaterialGroup, MaterialSlot, MeshBuild};
pub use maquette_nav::{ForwardHit, Footprint, NavEntry, NavWorld};
pub use maquette_plan::{
    Bounds, FloorPlan, STEP_UNIT, Shape, Structure, StructureId, StructureKind, TileCatalog,
    TileInfo, TileProvider, quantize_height,
};
pub use maquette_sim::{MoveIntent, PhysicsController, PlayerPhysicsState, TickResult};
pub use scene::{AssembledScene, assemble};
