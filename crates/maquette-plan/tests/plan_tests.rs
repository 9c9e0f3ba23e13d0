use maquette_geom::Vec2;
use maquette_plan::{FloorPlan, Shape, StructureKind, TileCatalog, TileInfo, TileProvider};

const SAMPLE_PLAN: &str = r#"
ceiling = 4.5
world_scale = 0.05
wall_texture = "wall_tex"
floor_texture = "floor_tex"

[[structures]]
id = "wall_tex"
shape = "rect"
kind = "wall"
bounds = { x = 0.0, y = 0.0, w = 20.0, h = 20.0 }

[[structures]]
id = "outer"
shape = "rect"
kind = "wall"
bounds = { x = 0.0, y = 0.0, w = 100.0, h = 50.0 }
material = "brick"

[[structures]]
id = "crate1"
shape = "rect"
kind = "wall"
bounds = { x = 10.0, y = 10.0, w = 10.0, h = 10.0 }
raised = true
block_height = 0.62

[[structures]]
id = "hall"
shape = "polygon"
kind = "room"
points = [[0.0, 0.0], [40.0, 0.0], [40.0, 30.0]]
"#;

#[test]
fn plan_loads_from_toml() {
    let plan = FloorPlan::from_toml_str(SAMPLE_PLAN).expect("plan parses");
    assert_eq!(plan.structures.len(), 4);
    assert_eq!(plan.ceiling, 4.5);
    assert_eq!(plan.world_scale, 0.05);
    assert!(plan.is_texture_source("wall_tex"));
    assert!(plan.is_texture_source("floor_tex"));
    assert!(!plan.is_texture_source("outer"));

    let outer = &plan.structures[1];
    assert_eq!(outer.shape, Shape::Rectangle);
    assert_eq!(outer.kind, StructureKind::Wall);
    assert!(!outer.raised);
    assert_eq!(outer.material.as_deref(), Some("brick"));
    assert!(outer.collidable());
    assert_eq!(outer.nav_block_height(), 0.0);
}

#[test]
fn raised_heights_snap_to_step_grid_on_load() {
    let plan = FloorPlan::from_toml_str(SAMPLE_PLAN).unwrap();
    let block = &plan.structures[2];
    assert!(block.raised);
    // 0.62 rounds to the nearest half unit
    assert_eq!(block.block_height, 0.5);
    assert_eq!(block.nav_block_height(), 0.5);
}

#[test]
fn polygon_bounds_derived_from_points() {
    let plan = FloorPlan::from_toml_str(SAMPLE_PLAN).unwrap();
    let hall = &plan.structures[3];
    assert_eq!(hall.shape, Shape::Polygon);
    assert_eq!(hall.points.len(), 3);
    assert_eq!(hall.bounds.w, 40.0);
    assert_eq!(hall.bounds.h, 30.0);
    assert!(!hall.collidable());

    let world = hall.points_world(plan.world_scale);
    assert_eq!(world[1], Vec2::new(2.0, 0.0));
}

#[test]
fn tile_catalog_parses_and_falls_back() {
    let catalog = TileCatalog::from_toml_str(
        r#"
        [tiles.brick]
        world_w = 2.0
        world_h = 2.0
        repeat_u = 2.0

        [tiles.planks]
        world_w = 1.5
        world_h = 3.0
        "#,
    )
    .expect("tiles parse");
    assert_eq!(catalog.len(), 2);

    let brick = catalog.tile(Some("brick"));
    assert_eq!(brick.world_w, 2.0);
    assert_eq!(brick.repeat_u, 2.0);
    // repeat_v defaults to 1
    assert_eq!(brick.repeat_v, 1.0);

    // unknown and absent materials use the 1:1 fallback
    assert_eq!(catalog.tile(Some("missing")), TileInfo::default());
    assert_eq!(catalog.tile(None), TileInfo::default());
}
