use maquette::{FloorPlan, NavWorld, TileCatalog, assemble};

const PLAN: &str = r#"
ceiling = 4.5
world_scale = 0.05
wall_texture = "wall_sample"
floor_texture = "floor_sample"

[[structures]]
id = "wall_sample"
shape = "rect"
kind = "wall"
bounds = { x = 0.0, y = 0.0, w = 20.0, h = 20.0 }

[[structures]]
id = "floor_sample"
shape = "rect"
kind = "room"
bounds = { x = 0.0, y = 20.0, w = 20.0, h = 20.0 }

[[structures]]
id = "outer"
shape = "rect"
kind = "wall"
bounds = { x = 0.0, y = 0.0, w = 100.0, h = 50.0 }

[[structures]]
id = "broken"
shape = "polygon"
kind = "room"
points = [[0.0, 0.0], [40.0, 0.0]]

[[structures]]
id = "lounge"
shape = "rect"
kind = "room"
bounds = { x = 10.0, y = 10.0, w = 40.0, h = 40.0 }

[[structures]]
id = "crate"
shape = "rect"
kind = "wall"
bounds = { x = 60.0, y = 10.0, w = 10.0, h = 10.0 }
raised = true
block_height = 0.5
"#;

// A two-point polygon is skipped and the rest of the batch still
// assembles.
#[test]
fn bad_polygon_does_not_abort_the_batch() {
    let plan = FloorPlan::from_toml_str(PLAN).unwrap();
    let scene = assemble(&plan, &TileCatalog::default());

    let ids: Vec<&str> = scene.meshes.iter().map(|(id, _)| id.as_str()).collect();
    assert!(!ids.contains(&"broken"));
    assert_eq!(ids, vec!["outer", "lounge", "crate"]);
}

#[test]
fn texture_sources_are_never_meshed() {
    let plan = FloorPlan::from_toml_str(PLAN).unwrap();
    let scene = assemble(&plan, &TileCatalog::default());

    for (id, _) in &scene.meshes {
        assert!(!plan.is_texture_source(id));
    }
    // the wall-sample marker is wall-kind, but it must not become a
    // collision entry either
    assert!(scene.nav.entries().iter().all(|e| e.id != "wall_sample"));
}

#[test]
fn nav_subset_is_the_collidable_structures() {
    let plan = FloorPlan::from_toml_str(PLAN).unwrap();
    let scene = assemble(&plan, &TileCatalog::default());

    // outer wall + raised crate; rooms excluded
    assert_eq!(scene.nav.len(), 2);
    let entries = scene.nav.entries();
    assert!(entries.iter().all(|e| e.is_wall));
    let by_id = |id: &str| entries.iter().find(|e| e.id == id).unwrap();
    assert_eq!(by_id("outer").block_height, 0.0);
    assert_eq!(by_id("crate").block_height, 0.5);
    assert_eq!(by_id("crate").top, 0.5);
    assert_eq!(by_id("outer").top, 4.5);
}

// Both nav-construction paths must agree: a wall that builds no mesh
// must not become an invisible collision entry either.
#[test]
fn degenerate_wall_collides_on_neither_path() {
    let plan = FloorPlan::from_toml_str(
        r#"
        [[structures]]
        id = "flat"
        shape = "rect"
        kind = "wall"
        bounds = { x = 0.0, y = 0.0, w = 0.0, h = 50.0 }
        "#,
    )
    .unwrap();
    let scene = assemble(&plan, &TileCatalog::default());
    assert_eq!(scene.mesh_count(), 0);
    assert_eq!(scene.nav.len(), 0);
    assert_eq!(NavWorld::from_plan(&plan).len(), scene.nav.len());
}

#[test]
fn meshes_carry_nav_tags() {
    let plan = FloorPlan::from_toml_str(PLAN).unwrap();
    let scene = assemble(&plan, &TileCatalog::default());

    let mesh_of = |id: &str| {
        &scene
            .meshes
            .iter()
            .find(|(mid, _)| mid == id)
            .unwrap()
            .1
    };
    assert!(mesh_of("outer").is_wall);
    assert!(!mesh_of("lounge").is_wall);
    assert!(mesh_of("crate").is_wall);
    assert_eq!(mesh_of("crate").block_height, 0.5);
}
