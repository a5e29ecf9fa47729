//! Match configuration
//!
//! A config bundles the field, physics and shot tuning, disc sizes and the
//! kickoff formation. Two presets mirror the two tables: `arcade` (pixel
//! field) and `pitch` (22:15 world-unit field). Custom tables load from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{Field, Formation, PhysicsParams, ShotParams};

/// Errors from loading or validating a config
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Named table preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    #[default]
    Arcade,
    Pitch,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Arcade => "arcade",
            Preset::Pitch => "pitch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arcade" | "2d" => Some(Preset::Arcade),
            "pitch" | "3d" => Some(Preset::Pitch),
            _ => None,
        }
    }
}

/// Everything needed to set up a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub field: Field,
    pub physics: PhysicsParams,
    pub shot: ShotParams,
    pub ball_radius: f32,
    pub piece_radius: f32,
    pub formation: Formation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::arcade()
    }
}

impl MatchConfig {
    pub fn arcade() -> Self {
        use crate::consts::arcade::*;
        let field = Field::new(HALF_LENGTH, HALF_WIDTH, GOAL_WIDTH);
        Self {
            formation: Formation::lines(&field, PIECE_LINE_DEPTH, PIECE_SPACING),
            field,
            physics: PhysicsParams::arcade(),
            shot: ShotParams::arcade(),
            ball_radius: BALL_RADIUS,
            piece_radius: PIECE_RADIUS,
        }
    }

    pub fn pitch() -> Self {
        use crate::consts::pitch::*;
        let field = Field::new(HALF_LENGTH, HALF_WIDTH, GOAL_WIDTH);
        Self {
            formation: Formation::lines(&field, PIECE_LINE_DEPTH, PIECE_SPACING),
            field,
            physics: PhysicsParams::pitch(),
            shot: ShotParams::pitch(),
            ball_radius: BALL_RADIUS,
            piece_radius: PIECE_RADIUS,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Arcade => Self::arcade(),
            Preset::Pitch => Self::pitch(),
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the numbers describe a playable table
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;
        require(field.half_length > 0.0, "field.half_length must be positive")?;
        require(field.half_width > 0.0, "field.half_width must be positive")?;
        require(field.goal_width > 0.0, "field.goal_width must be positive")?;
        require(
            field.goal_half_width() <= field.half_width,
            "field.goal_width must not exceed the field width",
        )?;

        let physics = &self.physics;
        require(
            physics.friction > 0.0 && physics.friction <= 1.0,
            "physics.friction must be in (0, 1]",
        )?;
        require(
            (0.0..=1.0).contains(&physics.bounce),
            "physics.bounce must be in [0, 1]",
        )?;
        require(physics.min_velocity >= 0.0, "physics.min_velocity must not be negative")?;

        let shot = &self.shot;
        require(shot.scale > 0.0, "shot.scale must be positive")?;
        require(shot.max_power > 0.0, "shot.max_power must be positive")?;
        require(shot.min_drag >= 0.0, "shot.min_drag must not be negative")?;

        require(self.ball_radius > 0.0, "ball_radius must be positive")?;
        require(self.piece_radius > 0.0, "piece_radius must be positive")?;

        self.formation
            .validate(field, self.ball_radius, self.piece_radius)
    }
}

fn require(ok: bool, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid(reason.to_string()))
    }
}
