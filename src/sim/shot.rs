//! Flick shots: turning a drag gesture into a launch velocity
//!
//! The player presses on one of their pieces and drags away from the
//! intended direction, like pulling back a slingshot. The shot goes from the
//! release point toward the press point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::{Disc, Side};

/// Drag-to-speed tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotParams {
    /// Speed per unit of drag distance
    pub scale: f32,
    /// Speed cap
    pub max_power: f32,
    /// Drags this short or shorter are ignored
    pub min_drag: f32,
}

impl ShotParams {
    pub fn arcade() -> Self {
        use crate::consts::arcade::*;
        Self {
            scale: SHOT_SCALE,
            max_power: MAX_POWER,
            min_drag: MIN_DRAG,
        }
    }

    pub fn pitch() -> Self {
        use crate::consts::pitch::*;
        Self {
            scale: SHOT_SCALE,
            max_power: MAX_POWER,
            min_drag: MIN_DRAG,
        }
    }

    /// Launch speed for a drag of the given length
    #[inline]
    pub fn power_for(&self, drag: f32) -> f32 {
        (drag * self.scale).min(self.max_power)
    }
}

impl Default for ShotParams {
    fn default() -> Self {
        Self::arcade()
    }
}

/// Launch velocity for a drag from `press` to `release`.
///
/// Returns `None` when the drag is too short to count as a shot.
pub fn shot_velocity(press: Vec2, release: Vec2, params: &ShotParams) -> Option<Vec2> {
    let pull = press - release;
    let drag = pull.length();
    if drag <= params.min_drag {
        return None;
    }
    Some(pull / drag * params.power_for(drag))
}

/// Power meter reading while the pointer is still held
pub fn preview_power(press: Vec2, pointer: Vec2, params: &ShotParams) -> f32 {
    params.power_for(press.distance(pointer))
}

/// Index of the first piece owned by `side` under `point`
pub fn pick_piece(discs: &[Disc], side: Side, point: Vec2) -> Option<usize> {
    discs
        .iter()
        .position(|d| d.role().side() == Some(side) && d.contains_point(point))
}
