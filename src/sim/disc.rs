//! Disc bodies: the ball and the player pieces
//!
//! Every moving thing on the table is a disc. Radius and mass are fixed at
//! construction; position and velocity change every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{BALL_MASS, PIECE_MASS};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, defends the positive end
    Home,
    /// Player 2, defends the negative end
    Away,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

/// What a disc is, which decides how it reacts to the end lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscRole {
    /// Scores when it crosses an end line inside the goal mouth
    Ball,
    /// A piece a player can flick; bounces off every wall
    Piece { side: Side },
}

impl DiscRole {
    /// Collision weight (not a physical mass)
    pub fn mass(&self) -> f32 {
        match self {
            DiscRole::Ball => BALL_MASS,
            DiscRole::Piece { .. } => PIECE_MASS,
        }
    }

    pub fn is_ball(&self) -> bool {
        matches!(self, DiscRole::Ball)
    }

    /// Owning side, if the disc belongs to a player
    pub fn side(&self) -> Option<Side> {
        match self {
            DiscRole::Ball => None,
            DiscRole::Piece { side } => Some(*side),
        }
    }
}

/// A movable circular rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiscRepr")]
pub struct Disc {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    role: DiscRole,
}

/// Wire form of a [`Disc`], checked before it becomes one
#[derive(Deserialize)]
struct DiscRepr {
    id: u32,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    role: DiscRole,
}

impl TryFrom<DiscRepr> for Disc {
    type Error = ConfigError;

    fn try_from(repr: DiscRepr) -> Result<Self, Self::Error> {
        if !(repr.radius.is_finite() && repr.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "disc {} radius must be positive, got {}",
                repr.id, repr.radius
            )));
        }
        let mut disc = Disc::new(repr.id, repr.role, repr.pos, repr.radius);
        disc.vel = repr.vel;
        Ok(disc)
    }
}

impl Disc {
    /// Create a disc at rest. Mass comes from the role.
    pub fn new(id: u32, role: DiscRole, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            role,
        }
    }

    pub fn ball(id: u32, pos: Vec2, radius: f32) -> Self {
        Self::new(id, DiscRole::Ball, pos, radius)
    }

    pub fn piece(id: u32, side: Side, pos: Vec2, radius: f32) -> Self {
        Self::new(id, DiscRole::Piece { side }, pos, radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Collision weight, always the role's
    #[inline]
    pub fn mass(&self) -> f32 {
        self.role.mass()
    }

    #[inline]
    pub fn role(&self) -> DiscRole {
        self.role
    }

    /// True if either velocity component exceeds the rest threshold
    pub fn is_moving(&self, min_velocity: f32) -> bool {
        self.vel.x.abs() > min_velocity || self.vel.y.abs() > min_velocity
    }

    /// Whether a point lies on the disc (edge included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Put the disc back on a spot, at rest
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}
