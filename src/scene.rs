//! Scene assembly: run the geometry builder over a whole plan and derive
//! the collision snapshot from the collidable subset.

use maquette_mesh::{BuildCtx, BuiltMesh, build_structure};
use maquette_nav::{NavEntry, NavWorld};
use maquette_plan::{FloorPlan, StructureId, TileProvider};

/// Everything downstream consumers need: renderable meshes keyed by
/// structure id, and the nav snapshot for the physics tick.
pub struct AssembledScene {
    pub meshes: Vec<(StructureId, BuiltMesh)>,
    pub nav: NavWorld,
}

impl AssembledScene {
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn vertex_total(&self) -> usize {
        self.meshes.iter().map(|(_, m)| m.mesh.vertex_count()).sum()
    }
}

/// Builds every structure in the plan. The two texture-source markers are
/// consulted as pixel sources elsewhere and never meshed. A structure that
/// fails to build is logged and skipped; one bad polygon must not take the
/// batch down.
pub fn assemble(plan: &FloorPlan, tiles: &dyn TileProvider) -> AssembledScene {
    let ctx = BuildCtx::from_plan(plan);
    let mut meshes = Vec::with_capacity(plan.structures.len());
    let mut nav_entries = Vec::new();

    for s in &plan.structures {
        if plan.is_texture_source(&s.id) {
            log::debug!("structure '{}' is a texture source, not meshed", s.id);
            continue;
        }
        let Some(built) = build_structure(s, &ctx, tiles) else {
            log::warn!("structure '{}' produced no geometry, skipped", s.id);
            continue;
        };
        if let Some(entry) = NavEntry::from_structure(s, plan.world_scale, plan.ceiling) {
            nav_entries.push(entry);
        }
        meshes.push((s.id.clone(), built));
    }

    log::info!(
        "assembled {} meshes, {} nav entries from {} structures",
        meshes.len(),
        nav_entries.len(),
        plan.structures.len()
    );
    AssembledScene {
        meshes,
        nav: NavWorld::new(nav_entries),
    }
}
