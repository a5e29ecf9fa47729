//! Fixed-step disc kinematics
//!
//! One tick: friction decay, rest clamp, integrate, walls. After every disc
//! has moved, touching pairs are resolved in index order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_all;
use super::disc::Disc;
use super::field::{Field, Goal};

/// Tunable physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Per-tick velocity retention (rolling resistance)
    pub friction: f32,
    /// Fraction of normal speed kept after a wall hit
    pub bounce: f32,
    /// Velocity components below this snap to zero
    pub min_velocity: f32,
}

impl PhysicsParams {
    pub fn arcade() -> Self {
        use crate::consts::arcade::*;
        Self {
            friction: FRICTION,
            bounce: BOUNCE,
            min_velocity: MIN_VELOCITY,
        }
    }

    pub fn pitch() -> Self {
        use crate::consts::pitch::*;
        Self {
            friction: FRICTION,
            bounce: BOUNCE,
            min_velocity: MIN_VELOCITY,
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::arcade()
    }
}

/// Decay a velocity by one tick of friction, snapping slow components to rest
#[inline]
pub fn apply_friction(vel: Vec2, params: &PhysicsParams) -> Vec2 {
    let snap = |c: f32| if c.abs() < params.min_velocity { 0.0 } else { c };
    let decayed = vel * params.friction;
    Vec2::new(snap(decayed.x), snap(decayed.y))
}

/// Advance one disc by a tick and resolve its wall contacts
pub fn advance_disc(disc: &mut Disc, field: &Field, params: &PhysicsParams) -> Option<Goal> {
    disc.vel = apply_friction(disc.vel, params);
    disc.pos += disc.vel;
    field.resolve_boundaries(disc, params.bounce)
}

/// Advance every disc by one tick, then resolve disc-disc contacts.
///
/// Returns goals in roster order. The ball that scored is not reset here.
pub fn step(discs: &mut [Disc], field: &Field, params: &PhysicsParams) -> Vec<Goal> {
    let goals: Vec<Goal> = discs
        .iter_mut()
        .filter_map(|disc| advance_disc(disc, field, params))
        .collect();

    let contacts = resolve_all(discs);
    if contacts > 0 {
        log::trace!("Resolved {} disc contacts", contacts);
    }

    goals
}

/// True when no disc is moving faster than the rest threshold
pub fn all_stopped(discs: &[Disc], params: &PhysicsParams) -> bool {
    discs.iter().all(|d| !d.is_moving(params.min_velocity))
}
