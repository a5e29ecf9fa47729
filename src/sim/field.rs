//! Field geometry and wall handling
//!
//! The field is a rectangle centred on the origin. The scoring axis is x:
//! the end lines sit at `x = ±half_length` and each has a goal mouth
//! centred on `y = 0`. The side walls sit at `y = ±half_width`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::{Disc, Side};

/// One of the two end lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum End {
    /// `x = -half_length`
    Negative,
    /// `x = +half_length`
    Positive,
}

impl End {
    /// Side guarding this end's goal
    pub fn defender(self) -> Side {
        match self {
            End::Positive => Side::Home,
            End::Negative => Side::Away,
        }
    }

    /// Side credited when the ball goes in at this end
    pub fn scorer(self) -> Side {
        self.defender().opponent()
    }

    /// End a side defends
    pub fn defended_by(side: Side) -> Self {
        match side {
            Side::Home => End::Positive,
            Side::Away => End::Negative,
        }
    }

    /// Unit direction from the centre spot toward this end
    pub fn direction(self) -> f32 {
        match self {
            End::Negative => -1.0,
            End::Positive => 1.0,
        }
    }
}

/// A goal reported by a disc during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Disc that entered the goal
    pub disc_id: u32,
    pub end: End,
    pub scorer: Side,
}

/// Playing field extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Distance from the centre spot to each end line
    pub half_length: f32,
    /// Distance from the centre spot to each side wall
    pub half_width: f32,
    /// Full width of each goal mouth
    pub goal_width: f32,
}

impl Field {
    pub fn new(half_length: f32, half_width: f32, goal_width: f32) -> Self {
        Self {
            half_length,
            half_width,
            goal_width,
        }
    }

    #[inline]
    pub fn goal_half_width(&self) -> f32 {
        self.goal_width / 2.0
    }

    /// Whether a cross-axis coordinate lies inside the goal mouth (posts included)
    #[inline]
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        let half = self.goal_half_width();
        (-half..=half).contains(&y)
    }

    /// Whether a disc of the given radius fits entirely on the field
    pub fn contains_disc(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius >= -self.half_length
            && pos.x + radius <= self.half_length
            && pos.y - radius >= -self.half_width
            && pos.y + radius <= self.half_width
    }

    /// Keep a disc inside the walls after it has moved.
    ///
    /// Walls clamp the disc back onto the field and reflect the normal
    /// velocity component scaled by `bounce`. A ball touching an end line
    /// inside the goal mouth is left alone and the goal is returned.
    pub fn resolve_boundaries(&self, disc: &mut Disc, bounce: f32) -> Option<Goal> {
        let r = disc.radius();

        // Side walls
        if disc.pos.y - r <= -self.half_width {
            disc.pos.y = -self.half_width + r;
            disc.vel.y = -disc.vel.y * bounce;
        } else if disc.pos.y + r >= self.half_width {
            disc.pos.y = self.half_width - r;
            disc.vel.y = -disc.vel.y * bounce;
        }

        // End lines
        let end = if disc.pos.x - r <= -self.half_length {
            End::Negative
        } else if disc.pos.x + r >= self.half_length {
            End::Positive
        } else {
            return None;
        };

        if disc.role().is_ball() && self.in_goal_mouth(disc.pos.y) {
            return Some(Goal {
                disc_id: disc.id,
                end,
                scorer: end.scorer(),
            });
        }

        disc.pos.x = end.direction() * (self.half_length - r);
        disc.vel.x = -disc.vel.x * bounce;
        None
    }
}
