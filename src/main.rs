use std::path::PathBuf;

use clap::Parser;
use hashbrown::HashMap;

use maquette::{
    AssembledScene, FloorPlan, MoveIntent, PhysicsController, PlayerPhysicsState, TileCatalog,
    Vec2, assemble,
};

#[derive(Parser, Debug)]
#[command(name = "maquette", about = "Assemble a floor plan and take a walk through it")]
struct Args {
    /// Floor-plan TOML; a built-in sample plan is used when omitted
    #[arg(long)]
    plan: Option<PathBuf>,
    /// Tile-metadata TOML
    #[arg(long)]
    tiles: Option<PathBuf>,
    /// Number of simulated walk ticks
    #[arg(long, default_value_t = 60)]
    ticks: usize,
    /// Walk speed in world units per tick
    #[arg(long, default_value_t = 0.1)]
    speed: f32,
}

const SAMPLE_PLAN: &str = r#"
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
id = "great_hall"
shape = "rect"
kind = "room"
bounds = { x = 0.0, y = 0.0, w = 240.0, h = 160.0 }

[[structures]]
id = "north_wall"
shape = "rect"
kind = "wall"
bounds = { x = 150.0, y = 20.0, w = 60.0, h = 10.0 }
material = "brick"

[[structures]]
id = "pillar"
shape = "circle"
kind = "wall"
bounds = { x = 110.0, y = 60.0, w = 24.0, h = 24.0 }
material = "brick"

[[structures]]
id = "dais"
shape = "rect"
kind = "wall"
bounds = { x = 40.0, y = 40.0, w = 60.0, h = 60.0 }
raised = true
block_height = 0.5
material = "planks"

[[structures]]
id = "stage"
shape = "polygon"
kind = "wall"
points = [[40.0, 100.0], [100.0, 100.0], [100.0, 140.0], [40.0, 140.0]]
raised = true
block_height = 1.0
material = "planks"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let plan = match &args.plan {
        Some(path) => FloorPlan::from_path(path)?,
        None => FloorPlan::from_toml_str(SAMPLE_PLAN)?,
    };
    let tiles = match &args.tiles {
        Some(path) => TileCatalog::from_path(path)?,
        None => TileCatalog::default(),
    };

    let scene = assemble(&plan, &tiles);
    print_stats(&plan, &scene);
    walk(&scene, args.ticks, args.speed);
    Ok(())
}

fn print_stats(plan: &FloorPlan, scene: &AssembledScene) {
    println!(
        "{} structures -> {} meshes ({} vertices), {} nav entries",
        plan.structures.len(),
        scene.mesh_count(),
        scene.vertex_total(),
        scene.nav.len()
    );
    let mut by_material: HashMap<&str, usize> = HashMap::new();
    for (id, built) in &scene.meshes {
        let key = plan
            .structures
            .iter()
            .find(|s| &s.id == id)
            .and_then(|s| s.material.as_deref())
            .unwrap_or("(default)");
        *by_material.entry(key).or_default() += built.mesh.vertex_count();
        println!(
            "  {:<12} {:>5} verts {:>5} idx  groups={} wall={} block_height={}",
            id,
            built.mesh.vertex_count(),
            built.mesh.index_count(),
            built.mesh.groups.len(),
            built.is_wall,
            built.block_height,
        );
    }
    let mut materials: Vec<_> = by_material.into_iter().collect();
    materials.sort();
    for (key, verts) in materials {
        println!("  material {:<12} {} verts", key, verts);
    }
}

fn walk(scene: &AssembledScene, ticks: usize, speed: f32) {
    let ctl = PhysicsController::new();
    let mut state = PlayerPhysicsState::default();
    let intent = MoveIntent {
        forward: true,
        ..Default::default()
    };
    let mut pos = Vec2::new(1.0, 3.5);
    let yaw = 0.0;

    println!("walking east from ({}, {})", pos.x, pos.y);
    for tick in 0..ticks {
        let dir = intent.wish_dir(yaw);
        let r = ctl.tick(
            &mut state,
            pos,
            dir,
            intent.effective_speed(speed),
            &scene.nav,
        );
        if r.can_move {
            pos += dir * intent.effective_speed(speed);
        }
        if tick % 10 == 0 || !r.can_move {
            println!(
                "tick {:>3}  pos ({:>5.2}, {:>5.2})  eye {:.2}  moving={} falling={}",
                tick, pos.x, pos.y, r.eye_height, r.can_move, state.falling
            );
        }
        if !r.can_move && !state.falling {
            println!("blocked, stopping");
            break;
        }
    }
}
