//! Per-shape mesh builders. All pure: `Structure` in, buffers out.

use maquette_geom::{Rect2, Vec2, Vec3};
use maquette_plan::TileInfo;

use crate::mesh_build::{MaterialSlot, MeshBuild};

/// Radial resolution of circle structures.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Edges shorter than this (world units) are dropped rather than fed into
/// UV divisions.
const EDGE_EPS: f32 = 1e-6;

/// U extent of a vertical face so the texture repeats at the tile's
/// physical size instead of stretching with the face.
#[inline]
fn face_u_extent(face_w: f32, tile: &TileInfo) -> f32 {
    if tile.world_w <= EDGE_EPS {
        tile.repeat_u
    } else {
        face_w / tile.world_w * tile.repeat_u
    }
}

/// The four vertical faces of a rectangle footprint, outward normals.
/// `flip` turns them inward for room shells.
fn rect_sides(mb: &mut MeshBuild, rect: Rect2, y0: f32, y1: f32, tile: &TileInfo, flip: bool) {
    let v1 = tile.repeat_v;
    let (min, max) = (rect.min, rect.max);
    // (corner0, corner1, outward normal) per face, corners left-to-right
    // when viewed from outside
    let faces = [
        (
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, min.y),
            Vec3::new(0.0, 0.0, -1.0),
        ),
        (
            Vec2::new(min.x, max.y),
            Vec2::new(max.x, max.y),
            Vec3::new(0.0, 0.0, 1.0),
        ),
        (
            Vec2::new(min.x, min.y),
            Vec2::new(min.x, max.y),
            Vec3::new(-1.0, 0.0, 0.0),
        ),
        (
            Vec2::new(max.x, max.y),
            Vec2::new(max.x, min.y),
            Vec3::new(1.0, 0.0, 0.0),
        ),
    ];
    for (p0, p1, n) in faces {
        let u1 = face_u_extent((p1 - p0).length(), tile);
        let n = if flip { -n } else { n };
        mb.add_quad_uv(
            [
                Vec3::from_plane(p0, y0),
                Vec3::from_plane(p1, y0),
                Vec3::from_plane(p1, y1),
                Vec3::from_plane(p0, y1),
            ],
            [(0.0, 0.0), (u1, 0.0), (u1, v1), (0.0, v1)],
            n,
        );
    }
}

/// Horizontal cap over a rectangle footprint. `project` switches the UVs
/// from tile repeats to the normalized footprint projection used by
/// raised-block tops.
fn rect_cap(mb: &mut MeshBuild, rect: Rect2, y: f32, up: bool, tile: &TileInfo, project: bool) {
    let n = if up {
        Vec3::UP
    } else {
        Vec3::new(0.0, -1.0, 0.0)
    };
    let (u1, v1) = if project {
        (1.0, 1.0)
    } else {
        (tile.repeat_u, tile.repeat_v)
    };
    let (min, max) = (rect.min, rect.max);
    mb.add_quad_uv(
        [
            Vec3::new(min.x, y, min.y),
            Vec3::new(max.x, y, min.y),
            Vec3::new(max.x, y, max.y),
            Vec3::new(min.x, y, max.y),
        ],
        [(0.0, 0.0), (u1, 0.0), (u1, v1), (0.0, v1)],
        n,
    );
}

/// Full-height solid box: 6 faces, 24 vertices, 36 indices, one material
/// group.
pub fn rect_solid(rect: Rect2, ceiling: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(6);
    mb.begin_group(MaterialSlot::Sides);
    rect_sides(&mut mb, rect, 0.0, ceiling, tile, false);
    rect_cap(&mut mb, rect, ceiling, true, tile, false);
    rect_cap(&mut mb, rect, 0.0, false, tile, false);
    mb.end_group();
    mb
}

/// Room perimeter: the four vertical faces only, facing inward, no caps.
pub fn rect_shell(rect: Rect2, ceiling: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(4);
    mb.begin_group(MaterialSlot::Sides);
    rect_sides(&mut mb, rect, 0.0, ceiling, tile, true);
    mb.end_group();
    mb
}

/// Raised block: box of `height` with three material groups. The top UVs
/// project the footprint to 0..1 so the renderer can crop the floor image
/// region under the block.
pub fn rect_block(rect: Rect2, height: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(6);
    mb.begin_group(MaterialSlot::Bottom);
    rect_cap(&mut mb, rect, 0.0, false, tile, true);
    mb.end_group();
    mb.begin_group(MaterialSlot::Top);
    rect_cap(&mut mb, rect, height, true, tile, true);
    mb.end_group();
    mb.begin_group(MaterialSlot::Sides);
    rect_sides(&mut mb, rect, 0.0, height, tile, false);
    mb.end_group();
    mb
}

/// Cylinder layout shared by every circle variant: two seam-duplicated
/// side rings plus the two cap-center vertices are always pushed; cap
/// rings and their fans are only emitted when `capped`. The open shell
/// therefore always has `2*(SEGMENTS+1) + 2` positions.
fn cylinder(
    center: Vec2,
    radius: f32,
    height: f32,
    tile: &TileInfo,
    capped: bool,
    project_top: bool,
) -> MeshBuild {
    let n_seg = CIRCLE_SEGMENTS;
    let mut mb = MeshBuild::default();
    let tau = std::f32::consts::TAU;
    let u_total = face_u_extent(tau * radius, tile);
    let v1 = tile.repeat_v;

    // Side rings: bottom/top vertex pairs, outward normals, seam column
    // duplicated for clean UV wrap.
    for i in 0..=n_seg {
        let t = i as f32 / n_seg as f32;
        let (s, c) = (t * tau).sin_cos();
        let p = center + Vec2::new(c, s) * radius;
        let n = Vec3::new(c, 0.0, s);
        let u = t * u_total;
        mb.push_vertex(Vec3::from_plane(p, 0.0), n, (u, 0.0));
        mb.push_vertex(Vec3::from_plane(p, height), n, (u, v1));
    }
    let down = Vec3::new(0.0, -1.0, 0.0);
    let cap_uv = |c_ang: f32, s_ang: f32| -> (f32, f32) {
        // Cap UVs span the footprint: projected 0..1 for raised tops,
        // tile repeats otherwise.
        let (uu, vv) = ((c_ang + 1.0) * 0.5, (s_ang + 1.0) * 0.5);
        if project_top {
            (uu, vv)
        } else {
            (uu * tile.repeat_u, vv * tile.repeat_v)
        }
    };
    let bottom_center = mb.push_vertex(Vec3::from_plane(center, 0.0), down, cap_uv(0.0, 0.0));
    let top_center = mb.push_vertex(Vec3::from_plane(center, height), Vec3::UP, cap_uv(0.0, 0.0));

    let side_tris = |mb: &mut MeshBuild| {
        for i in 0..n_seg {
            let b0 = (2 * i) as u16;
            let t0 = b0 + 1;
            let b1 = b0 + 2;
            let t1 = b0 + 3;
            mb.push_tri(b0, t1, b1);
            mb.push_tri(b0, t0, t1);
        }
    };

    if !capped {
        mb.begin_group(MaterialSlot::Sides);
        side_tris(&mut mb);
        mb.end_group();
        return mb;
    }

    // Cap rings carry face normals and cap UVs, so they are separate from
    // the side rings.
    let bottom_ring = mb.vertex_count() as u16;
    for i in 0..=n_seg {
        let t = i as f32 / n_seg as f32;
        let (s, c) = (t * tau).sin_cos();
        let p = center + Vec2::new(c, s) * radius;
        mb.push_vertex(Vec3::from_plane(p, 0.0), down, cap_uv(c, s));
    }
    let top_ring = mb.vertex_count() as u16;
    for i in 0..=n_seg {
        let t = i as f32 / n_seg as f32;
        let (s, c) = (t * tau).sin_cos();
        let p = center + Vec2::new(c, s) * radius;
        mb.push_vertex(Vec3::from_plane(p, height), Vec3::UP, cap_uv(c, s));
    }

    let three_slots = project_top;
    if three_slots {
        mb.begin_group(MaterialSlot::Bottom);
    } else {
        mb.begin_group(MaterialSlot::Sides);
    }
    // Bottom fan winds forward (CCW seen from below)
    for i in 0..n_seg as u16 {
        mb.push_tri(bottom_center, bottom_ring + i, bottom_ring + i + 1);
    }
    if three_slots {
        mb.end_group();
        mb.begin_group(MaterialSlot::Top);
    }
    // Top fan winds reversed (CCW seen from above)
    for i in 0..n_seg as u16 {
        mb.push_tri(top_center, top_ring + i + 1, top_ring + i);
    }
    if three_slots {
        mb.end_group();
        mb.begin_group(MaterialSlot::Sides);
    }
    side_tris(&mut mb);
    mb.end_group();
    mb
}

/// Closed full-height cylinder (circle wall).
pub fn circle_solid(center: Vec2, radius: f32, ceiling: f32, tile: &TileInfo) -> MeshBuild {
    cylinder(center, radius, ceiling, tile, true, false)
}

/// Open cylinder shell (circle room), no caps.
pub fn circle_shell(center: Vec2, radius: f32, ceiling: f32, tile: &TileInfo) -> MeshBuild {
    cylinder(center, radius, ceiling, tile, false, false)
}

/// Solid raised cylinder with a projected top.
pub fn circle_block(center: Vec2, radius: f32, height: f32, tile: &TileInfo) -> MeshBuild {
    cylinder(center, radius, height, tile, true, true)
}

/// One vertical quad per polygon edge from `y0` to `y1`. Outward normal is
/// the edge direction rotated 90 degrees; rooms flip inward. Degenerate
/// edges are skipped, never divided by.
fn polygon_sides(
    mb: &mut MeshBuild,
    points: &[Vec2],
    y0: f32,
    y1: f32,
    tile: &TileInfo,
    flip: bool,
    unit_uv: bool,
) {
    let n_pts = points.len();
    for i in 0..n_pts {
        let p0 = points[i];
        let p1 = points[(i + 1) % n_pts];
        let edge = p1 - p0;
        let len = edge.length();
        if len <= EDGE_EPS {
            log::warn!("skipping zero-length polygon edge at vertex {}", i);
            continue;
        }
        let u1 = if unit_uv { 1.0 } else { face_u_extent(len, tile) };
        let v1 = if unit_uv { 1.0 } else { tile.repeat_v };
        let mut n2 = (edge / len).perp();
        if flip {
            n2 = -n2;
        }
        mb.add_quad_uv(
            [
                Vec3::from_plane(p0, y0),
                Vec3::from_plane(p1, y0),
                Vec3::from_plane(p1, y1),
                Vec3::from_plane(p0, y1),
            ],
            [(0.0, 0.0), (u1, 0.0), (u1, v1), (0.0, v1)],
            Vec3::from_plane(n2, 0.0),
        );
    }
}

/// Fan-triangulated horizontal cap over a polygon outline. Top UVs project
/// each vertex into the outline's bounding rect (tile space).
fn polygon_cap(mb: &mut MeshBuild, points: &[Vec2], rect: Rect2, y: f32, up: bool) {
    let n = if up {
        Vec3::UP
    } else {
        Vec3::new(0.0, -1.0, 0.0)
    };
    let w = rect.width().max(EDGE_EPS);
    let h = rect.height().max(EDGE_EPS);
    let base = mb.vertex_count() as u16;
    for p in points {
        let uv = ((p.x - rect.min.x) / w, (p.y - rect.min.y) / h);
        mb.push_vertex(Vec3::from_plane(*p, y), n, uv);
    }
    for i in 1..(points.len() as u16 - 1) {
        if up {
            mb.push_tri(base, base + i + 1, base + i);
        } else {
            mb.push_tri(base, base + i, base + i + 1);
        }
    }
}

/// Full-height polygon wall: per-edge quad strip, no caps.
pub fn polygon_walls(points: &[Vec2], ceiling: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(points.len());
    mb.begin_group(MaterialSlot::Sides);
    polygon_sides(&mut mb, points, 0.0, ceiling, tile, false, false);
    mb.end_group();
    mb
}

/// Polygon room: open per-edge strip facing inward.
pub fn polygon_shell(points: &[Vec2], ceiling: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(points.len());
    mb.begin_group(MaterialSlot::Sides);
    polygon_sides(&mut mb, points, 0.0, ceiling, tile, true, false);
    mb.end_group();
    mb
}

/// Raised polygon block: extruded outline with fan caps and three material
/// groups. Side quads get plain 0..1 UVs per quad.
pub fn polygon_block(points: &[Vec2], rect: Rect2, height: f32, tile: &TileInfo) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.reserve_quads(points.len() + 2);
    mb.begin_group(MaterialSlot::Bottom);
    polygon_cap(&mut mb, points, rect, 0.0, false);
    mb.end_group();
    mb.begin_group(MaterialSlot::Top);
    polygon_cap(&mut mb, points, rect, height, true);
    mb.end_group();
    mb.begin_group(MaterialSlot::Sides);
    polygon_sides(&mut mb, points, 0.0, height, tile, false, true);
    mb.end_group();
    mb
}
