//! First-person locomotion over a nav snapshot: quantized step-up and
//! step-down, fall animation, and the per-tick eye height.
#![forbid(unsafe_code)]

use maquette_geom::{Vec2, Vec3};
use maquette_nav::{HEIGHT_EPS, NavWorld};
use maquette_plan::STEP_UNIT;

/// Per-tick movement intent from the input collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl MoveIntent {
    pub const RUN_MULT: f32 = 1.6;

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// Desired XZ direction for a given camera yaw (degrees), normalized.
    /// Zero when no keys are held or opposing keys cancel out.
    pub fn wish_dir(&self, yaw_deg: f32) -> Vec2 {
        let (s, c) = yaw_deg.to_radians().sin_cos();
        let fwd = Vec2::new(c, s);
        let right = fwd.perp();
        let mut wish = Vec2::ZERO;
        if self.forward {
            wish += fwd;
        }
        if self.backward {
            wish -= fwd;
        }
        if self.left {
            wish -= right;
        }
        if self.right {
            wish += right;
        }
        wish.normalized()
    }

    /// Base speed with the sprint multiplier applied.
    pub fn effective_speed(&self, base: f32) -> f32 {
        if self.sprint { base * Self::RUN_MULT } else { base }
    }
}

/// The avatar's vertical state. Owned by the caller, mutated only by
/// [`PhysicsController::tick`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerPhysicsState {
    /// Current standing height, always >= 0.
    pub ground_height: f32,
    pub falling: bool,
}

impl Default for PlayerPhysicsState {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            falling: false,
        }
    }
}

/// What a tick decided: whether the horizontal move may happen (applied by
/// the external controls collaborator) and the camera's eye height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickResult {
    pub can_move: bool,
    pub eye_height: f32,
}

/// Locomotion tuning. Heights move on the [`STEP_UNIT`] grid; descent
/// animates at a fixed rate per tick rather than snapping.
#[derive(Copy, Clone, Debug)]
pub struct PhysicsController {
    /// Camera height above the ground surface.
    pub eye_offset: f32,
    /// World units descended per falling tick.
    pub fall_rate: f32,
    /// Minimum forward obstruction probe distance.
    pub probe_dist: f32,
    /// Maximum downward query range.
    pub down_range: f32,
}

impl Default for PhysicsController {
    fn default() -> Self {
        Self {
            eye_offset: 1.7,
            fall_rate: 0.1,
            probe_dist: 0.5,
            down_range: 32.0,
        }
    }
}

impl PhysicsController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn eye_height(&self, state: &PlayerPhysicsState) -> f32 {
        state.ground_height + self.eye_offset
    }

    /// Advances one tick. `pos` is the avatar's current XZ position,
    /// `dir` the desired direction (need not be normalized), `speed` the
    /// horizontal distance this tick would cover.
    pub fn tick(
        &self,
        state: &mut PlayerPhysicsState,
        pos: Vec2,
        dir: Vec2,
        speed: f32,
        world: &NavWorld,
    ) -> TickResult {
        let dir = dir.normalized();
        let moving = dir.length_sq() > 0.0 && speed > 0.0;
        let mut can_move = moving;

        if moving {
            let origin = Vec3::from_plane(pos, state.ground_height);
            let probe = self.probe_dist.max(speed);
            match world.forward(origin, dir, probe, state.ground_height) {
                Some(hit) if hit.block_height == 0.0 => {
                    // solid wall
                    can_move = false;
                }
                Some(hit) => {
                    let delta = hit.block_height - state.ground_height;
                    if (delta - STEP_UNIT).abs() <= HEIGHT_EPS {
                        // one-step climb; anything taller is impassable
                        state.ground_height = hit.block_height;
                        state.falling = false;
                    } else {
                        can_move = false;
                    }
                }
                None => {
                    // path is clear at body height; resolve the floor
                    // under the candidate position
                    let next = pos + dir * speed;
                    let cast = Vec3::from_plane(next, self.eye_height(state));
                    let surface = world.down(cast, self.down_range);
                    let delta = surface - state.ground_height;
                    if delta < -HEIGHT_EPS {
                        // step down animates through the falling state
                        state.falling = true;
                    } else if (delta - STEP_UNIT).abs() <= HEIGHT_EPS {
                        state.ground_height = surface;
                        state.falling = false;
                    } else if delta.abs() <= HEIGHT_EPS {
                        // level ground
                    } else {
                        // more than one step in one tick: too steep
                        can_move = false;
                    }
                }
            }
        }

        if state.falling {
            let foot = if can_move && moving {
                pos + dir * speed
            } else {
                pos
            };
            let cast = Vec3::from_plane(foot, self.eye_height(state));
            let target = world.down(cast, self.down_range).max(0.0);
            if state.ground_height - target > self.fall_rate {
                state.ground_height -= self.fall_rate;
            } else {
                state.ground_height = target;
                state.falling = false;
            }
            state.ground_height = state.ground_height.max(0.0);
        }

        TickResult {
            can_move,
            eye_height: self.eye_height(state),
        }
    }
}
