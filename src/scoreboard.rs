//! Match scoreboard
//!
//! Goal totals per side plus a log of every goal, kept for the life of the
//! match (not persisted).

use serde::{Deserialize, Serialize};

use crate::sim::{End, Side};

/// A single goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Simulation tick the goal was scored on
    pub tick: u64,
    pub scorer: Side,
    /// End line the ball crossed
    pub end: End,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub home: u32,
    pub away: u32,
    pub goals: Vec<GoalRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a goal
    pub fn record(&mut self, tick: u64, scorer: Side, end: End) {
        match scorer {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
        self.goals.push(GoalRecord { tick, scorer, end });
    }

    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home + self.away
    }

    /// Side ahead, or None when level
    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Most recent goal (if any)
    pub fn last_goal(&self) -> Option<&GoalRecord> {
        self.goals.last()
    }

    /// HUD line, e.g. "P1: 2  P2: 1"
    pub fn summary(&self) -> String {
        format!("P1: {}  P2: {}", self.home, self.away)
    }
}
