//! 2D ray and point tests against footprint silhouettes.

use maquette_geom::{Rect2, Vec2};

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v }
}

/// Slab test: nearest entry parameter of `origin + t*dir` against the
/// rectangle, `t` clamped to `[0, max_dist]`. An origin already inside
/// reports `t = 0`.
pub fn ray_rect(origin: Vec2, dir: Vec2, max_dist: f32, rect: Rect2) -> Option<f32> {
    let inv_x = inv_or_max(dir.x);
    let inv_y = inv_or_max(dir.y);
    let (tx0, tx1) = {
        let a = (rect.min.x - origin.x) * inv_x;
        let b = (rect.max.x - origin.x) * inv_x;
        (a.min(b), a.max(b))
    };
    let (ty0, ty1) = {
        let a = (rect.min.y - origin.y) * inv_y;
        let b = (rect.max.y - origin.y) * inv_y;
        (a.min(b), a.max(b))
    };
    let t_enter = tx0.max(ty0);
    let t_exit = tx1.min(ty1);
    if t_exit < t_enter.max(0.0) {
        return None;
    }
    let t = t_enter.max(0.0);
    if t > max_dist { None } else { Some(t) }
}

/// Nearest non-negative root of the ray/circle quadratic within range.
pub fn ray_circle(origin: Vec2, dir: Vec2, max_dist: f32, center: Vec2, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.length_sq();
    if a < 1e-12 {
        return None;
    }
    let b = 2.0 * oc.dot(dir);
    let c = oc.length_sq() - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_d = disc.sqrt();
    let t0 = (-b - sqrt_d) / (2.0 * a);
    let t1 = (-b + sqrt_d) / (2.0 * a);
    let t = if t0 >= 0.0 {
        t0
    } else if t1 >= 0.0 {
        // origin inside the circle
        0.0
    } else {
        return None;
    };
    if t > max_dist { None } else { Some(t) }
}

/// Ray vs one edge segment: solves `origin + t*dir = p0 + s*(p1-p0)` for
/// `t >= 0`, `0 <= s <= 1`.
fn ray_segment(origin: Vec2, dir: Vec2, p0: Vec2, p1: Vec2) -> Option<f32> {
    let e = p1 - p0;
    let denom = dir.x * e.y - dir.y * e.x;
    if denom.abs() < 1e-12 {
        return None; // parallel
    }
    let w = p0 - origin;
    let t = (w.x * e.y - w.y * e.x) / denom;
    let s = (w.x * dir.y - w.y * dir.x) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}

/// Nearest edge crossing of the polygon outline within range.
pub fn ray_polygon(origin: Vec2, dir: Vec2, max_dist: f32, points: &[Vec2]) -> Option<f32> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let mut best: Option<f32> = None;
    for i in 0..n {
        if let Some(t) = ray_segment(origin, dir, points[i], points[(i + 1) % n]) {
            if t <= max_dist && best.map_or(true, |b| t < b) {
                best = Some(t);
            }
        }
    }
    best
}

/// Even-odd crossing test.
pub fn point_in_polygon(p: Vec2, points: &[Vec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
