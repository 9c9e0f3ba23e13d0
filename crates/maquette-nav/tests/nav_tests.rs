use maquette_geom::{Rect2, Vec2, Vec3};
use maquette_nav::{Footprint, NavEntry, NavWorld};
use maquette_plan::{Bounds, FloorPlan, Shape, Structure, StructureKind};

const CEILING: f32 = 4.5;

fn wall(id: &str, rect: Rect2) -> NavEntry {
    NavEntry {
        id: id.into(),
        footprint: Footprint::Rect(rect),
        top: CEILING,
        is_wall: true,
        block_height: 0.0,
    }
}

fn block(id: &str, rect: Rect2, height: f32) -> NavEntry {
    NavEntry {
        id: id.into(),
        footprint: Footprint::Rect(rect),
        top: height,
        is_wall: true,
        block_height: height,
    }
}

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect2 {
    Rect2::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

fn origin_at(ground: f32) -> Vec3 {
    Vec3::new(0.0, ground, 0.0)
}

const EAST: Vec2 = Vec2 { x: 1.0, y: 0.0 };

#[test]
fn forward_hits_wall_at_distance() {
    let world = NavWorld::new(vec![wall("w", rect(2.0, -1.0, 3.0, 1.0))]);
    let hit = world.forward(origin_at(0.0), EAST, 10.0, 0.0).expect("hit");
    assert!((hit.t - 2.0).abs() < 1e-4);
    assert_eq!(hit.block_height, 0.0);
    assert_eq!(hit.id, "w");

    // out of range
    assert!(world.forward(origin_at(0.0), EAST, 1.5, 0.0).is_none());
}

#[test]
fn forward_filters_steppable_blocks() {
    // half-step and one-step blocks ahead; only one-step and taller obstruct
    let low = block("low", rect(2.0, -1.0, 3.0, 1.0), 0.5);
    let world = NavWorld::new(vec![low.clone()]);
    // ground 0: the 0.5 block is exactly one step up, so it registers
    let hit = world.forward(origin_at(0.0), EAST, 10.0, 0.0).unwrap();
    assert_eq!(hit.block_height, 0.5);
    // ground 0.5: standing level with its top, passes over it
    assert!(world.forward(origin_at(0.5), EAST, 10.0, 0.5).is_none());
    // ground 1.0: block is below, still no obstruction
    assert!(world.forward(origin_at(1.0), EAST, 10.0, 1.0).is_none());

    let tall = block("tall", rect(2.0, -1.0, 3.0, 1.0), 2.0);
    let world = NavWorld::new(vec![tall]);
    // two steps up: obstructs
    assert!(world.forward(origin_at(1.0), EAST, 10.0, 1.0).is_some());
    // standing at 1.5: exactly one step below its top, still a forward hit
    assert!(world.forward(origin_at(1.5), EAST, 10.0, 1.5).is_some());
    // standing at its height: passes over
    assert!(world.forward(origin_at(2.0), EAST, 10.0, 2.0).is_none());
}

#[test]
fn forward_sees_wall_from_atop_a_block() {
    // dual-height casting: avatar on a 2.0 block must not walk through a
    // full wall whose base is at absolute ground
    let world = NavWorld::new(vec![wall("w", rect(2.0, -1.0, 3.0, 1.0))]);
    let hit = world.forward(origin_at(2.0), EAST, 10.0, 2.0).expect("wall hit");
    assert_eq!(hit.block_height, 0.0);
}

#[test]
fn forward_nearest_hit_wins() {
    let world = NavWorld::new(vec![
        wall("far", rect(4.0, -1.0, 5.0, 1.0)),
        block("near", rect(2.0, -1.0, 3.0, 1.0), 3.0),
    ]);
    let hit = world.forward(origin_at(0.0), EAST, 10.0, 0.0).unwrap();
    assert_eq!(hit.id, "near");
    assert_eq!(hit.block_height, 3.0);
}

#[test]
fn forward_handles_circle_and_polygon_footprints() {
    let circle = NavEntry {
        id: "c".into(),
        footprint: Footprint::Circle {
            center: Vec2::new(3.0, 0.0),
            radius: 1.0,
        },
        top: CEILING,
        is_wall: true,
        block_height: 0.0,
    };
    let tri = NavEntry {
        id: "p".into(),
        footprint: Footprint::Polygon(vec![
            Vec2::new(6.0, -1.0),
            Vec2::new(8.0, -1.0),
            Vec2::new(7.0, 1.0),
        ]),
        top: CEILING,
        is_wall: true,
        block_height: 0.0,
    };
    let world = NavWorld::new(vec![tri, circle]);
    let hit = world.forward(origin_at(0.0), EAST, 20.0, 0.0).unwrap();
    assert_eq!(hit.id, "c");
    assert!((hit.t - 2.0).abs() < 1e-4);

    // past the circle, the polygon edge is next
    let from = Vec3::new(4.5, 0.0, 0.0);
    let hit = world.forward(from, EAST, 20.0, 0.0).unwrap();
    assert_eq!(hit.id, "p");
}

#[test]
fn down_returns_highest_surface_under_position() {
    let world = NavWorld::new(vec![
        block("low", rect(-1.0, -1.0, 1.0, 1.0), 0.5),
        block("high", rect(-1.0, -1.0, 1.0, 1.0), 1.5),
    ]);
    let h = world.down(Vec3::new(0.0, 3.0, 0.0), 10.0);
    assert_eq!(h, 1.5);

    // beside the blocks: absolute ground
    assert_eq!(world.down(Vec3::new(5.0, 3.0, 0.0), 10.0), 0.0);
}

#[test]
fn down_ignores_surfaces_above_the_cast() {
    let world = NavWorld::new(vec![block("b", rect(-1.0, -1.0, 1.0, 1.0), 2.0)]);
    // cast origin below the block top: not a floor candidate
    assert_eq!(world.down(Vec3::new(0.0, 1.0, 0.0), 10.0), 0.0);
}

#[test]
fn empty_world_is_permissive() {
    let world = NavWorld::default();
    assert!(world.is_empty());
    assert!(world.forward(origin_at(0.0), EAST, 10.0, 0.0).is_none());
    assert_eq!(world.down(Vec3::new(0.0, 2.0, 0.0), 10.0), 0.0);
}

fn plan_wall(id: &str, shape: Shape, bounds: Bounds) -> Structure {
    Structure {
        id: id.into(),
        shape,
        bounds,
        points: Vec::new(),
        kind: StructureKind::Wall,
        raised: false,
        block_height: 0.0,
        material: None,
    }
}

// A structure that produces no geometry must not produce a collision
// entry either; both must follow the same degeneracy rules.
#[test]
fn degenerate_silhouettes_yield_no_entry() {
    let flat = plan_wall("flat", Shape::Rectangle, Bounds::new(0.0, 0.0, 0.0, 50.0));
    assert!(NavEntry::from_structure(&flat, 0.05, CEILING).is_none());

    let point = plan_wall("point", Shape::Circle, Bounds::new(0.0, 0.0, 0.0, 0.0));
    assert!(NavEntry::from_structure(&point, 0.05, CEILING).is_none());

    let mut line = plan_wall("line", Shape::Polygon, Bounds::default());
    line.points = vec![Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0)];
    assert!(NavEntry::from_structure(&line, 0.05, CEILING).is_none());
}

#[test]
fn from_plan_skips_degenerate_structures() {
    let plan = FloorPlan::new(vec![
        plan_wall("flat", Shape::Rectangle, Bounds::new(0.0, 0.0, 0.0, 50.0)),
        plan_wall("solid", Shape::Rectangle, Bounds::new(0.0, 0.0, 100.0, 50.0)),
    ]);
    let world = NavWorld::from_plan(&plan);
    assert_eq!(world.len(), 1);
    assert_eq!(world.entries()[0].id, "solid");
}

#[test]
fn zero_direction_never_hits() {
    let world = NavWorld::new(vec![wall("w", rect(-1.0, -1.0, 1.0, 1.0))]);
    assert!(world.forward(origin_at(0.0), Vec2::ZERO, 10.0, 0.0).is_none());
}
