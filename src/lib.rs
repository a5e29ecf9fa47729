//! Disc Soccer - flick-soccer on a table of sliding discs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (disc physics, collisions, match state)
//! - `config`: Match presets and JSON configuration
//! - `scoreboard`: Score tally and goal log

pub mod config;
pub mod scoreboard;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use scoreboard::Scoreboard;

/// Game configuration constants for the two table presets
pub mod consts {
    /// Fixed simulation rate; velocities are expressed in field units per tick
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;

    /// Collision weight of the ball
    pub const BALL_MASS: f32 = 2.0;
    /// Collision weight of a player piece
    pub const PIECE_MASS: f32 = 1.0;
    /// Pieces per side
    pub const PIECES_PER_SIDE: usize = 3;

    /// Arcade table (pixel units, 1280x720 screen)
    pub mod arcade {
        pub const HALF_LENGTH: f32 = 360.0;
        pub const HALF_WIDTH: f32 = 640.0;
        pub const GOAL_WIDTH: f32 = 300.0;

        pub const FRICTION: f32 = 0.99;
        pub const BOUNCE: f32 = 0.8;
        pub const MIN_VELOCITY: f32 = 0.1;

        pub const BALL_RADIUS: f32 = 20.0;
        pub const PIECE_RADIUS: f32 = 30.0;
        /// Distance of the piece line from its own end line
        pub const PIECE_LINE_DEPTH: f32 = 200.0;
        /// Cross-axis spacing between neighbouring pieces
        pub const PIECE_SPACING: f32 = 100.0;

        /// Drag distance to speed
        pub const SHOT_SCALE: f32 = 0.1;
        pub const MAX_POWER: f32 = 200.0;
        pub const MIN_DRAG: f32 = 5.0;
    }

    /// Pitch table (22:15 field, world units)
    pub mod pitch {
        pub const HALF_LENGTH: f32 = 11.0;
        pub const HALF_WIDTH: f32 = 7.5;
        pub const GOAL_WIDTH: f32 = 2.4; // scaled from 7.32m

        pub const FRICTION: f32 = 0.96;
        pub const BOUNCE: f32 = 0.8;
        pub const MIN_VELOCITY: f32 = 0.05;

        pub const BALL_RADIUS: f32 = 0.35;
        pub const PIECE_RADIUS: f32 = 0.45;
        pub const PIECE_LINE_DEPTH: f32 = 5.0; // pieces at x = ±6
        pub const PIECE_SPACING: f32 = 2.0;

        pub const SHOT_SCALE: f32 = 0.8;
        pub const MAX_POWER: f32 = 2.5;
        pub const MIN_DRAG: f32 = 0.5;
    }
}
