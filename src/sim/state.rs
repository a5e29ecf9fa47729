//! Match state and kickoff layout
//!
//! Everything a match needs lives in [`MatchState`]: the disc roster, the
//! scoreboard, whose turn it is and the shot being aimed. The caller owns it
//! and passes it to [`super::tick`] once per fixed step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::{Disc, DiscRole, Side};
use super::field::{End, Field, Goal};
use super::physics;
use crate::config::{ConfigError, MatchConfig};
use crate::consts::PIECES_PER_SIDE;
use crate::scoreboard::Scoreboard;

/// Kickoff spots for every disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub ball: Vec2,
    pub home: Vec<Vec2>,
    pub away: Vec<Vec2>,
}

impl Formation {
    /// Ball on the centre spot, each side's pieces in a line `depth` in front
    /// of its own end line, `spacing` apart across the field.
    pub fn lines(field: &Field, depth: f32, spacing: f32) -> Self {
        let line = |end: End| -> Vec<Vec2> {
            let x = end.direction() * (field.half_length - depth);
            let mid = (PIECES_PER_SIDE as f32 - 1.0) / 2.0;
            (0..PIECES_PER_SIDE)
                .map(|i| Vec2::new(x, (i as f32 - mid) * spacing))
                .collect()
        };
        Self {
            ball: Vec2::ZERO,
            home: line(End::defended_by(Side::Home)),
            away: line(End::defended_by(Side::Away)),
        }
    }

    /// Kickoff spot of the `slot`-th disc with this role
    pub fn spot_for(&self, role: DiscRole, slot: usize) -> Option<Vec2> {
        match role {
            DiscRole::Ball => Some(self.ball),
            DiscRole::Piece { side: Side::Home } => self.home.get(slot).copied(),
            DiscRole::Piece { side: Side::Away } => self.away.get(slot).copied(),
        }
    }

    /// Check the roster size, and that every disc fits on the field without
    /// touching another
    pub fn validate(
        &self,
        field: &Field,
        ball_radius: f32,
        piece_radius: f32,
    ) -> Result<(), ConfigError> {
        if self.home.len() != PIECES_PER_SIDE || self.away.len() != PIECES_PER_SIDE {
            return Err(ConfigError::Invalid(format!(
                "formation needs {} pieces per side, got {} home and {} away",
                PIECES_PER_SIDE,
                self.home.len(),
                self.away.len()
            )));
        }

        let placed: Vec<(Vec2, f32)> = self
            .home
            .iter()
            .chain(self.away.iter())
            .map(|&p| (p, piece_radius))
            .chain(std::iter::once((self.ball, ball_radius)))
            .collect();

        for (i, &(pos, r)) in placed.iter().enumerate() {
            if !field.contains_disc(pos, r) {
                return Err(ConfigError::Invalid(format!(
                    "formation spot {} ({}, {}) is off the field",
                    i, pos.x, pos.y
                )));
            }
            for (j, &(other, other_r)) in placed.iter().enumerate().skip(i + 1) {
                if pos.distance(other) <= r + other_r {
                    let reason = format!("formation spots {i} and {j} overlap");
                    return Err(ConfigError::Invalid(reason));
                }
            }
        }
        Ok(())
    }
}

/// A shot being lined up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Roster index of the selected piece
    pub disc: usize,
    /// Where the press started
    pub start: Vec2,
}

/// Things that happened during a tick, for HUD/audio layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotTaken { disc_id: u32, side: Side, speed: f32 },
    Goal(Goal),
    TurnChanged { to: Side },
}

/// What the current player can do right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Discs at rest, waiting for a press
    Ready,
    /// A piece is selected and the pointer is held
    Aiming,
    /// Shot taken, waiting for everything to stop
    Waiting,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    /// Home pieces, then away pieces, then the ball
    pub discs: Vec<Disc>,
    pub scoreboard: Scoreboard,
    pub current_player: Side,
    pub aim: Option<Aim>,
    /// Current player has shot and is waiting for the discs to stop
    pub turn_taken: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events not yet collected by the caller
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl MatchState {
    /// Set up a match at kickoff with Home to play
    pub fn new(config: MatchConfig) -> Self {
        let discs = build_roster(&config);
        Self {
            config,
            discs,
            scoreboard: Scoreboard::new(),
            current_player: Side::Home,
            aim: None,
            turn_taken: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn ball(&self) -> Option<&Disc> {
        self.discs.iter().find(|d| d.role().is_ball())
    }

    /// Roster indices of a side's pieces
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.discs
            .iter()
            .enumerate()
            .filter(move |(_, d)| d.role().side() == Some(side))
            .map(|(i, _)| i)
    }

    pub fn all_stopped(&self) -> bool {
        physics::all_stopped(&self.discs, &self.config.physics)
    }

    /// Whether a new shot may be started
    pub fn accepts_shot(&self) -> bool {
        self.all_stopped() && !self.turn_taken
    }

    pub fn turn_status(&self) -> TurnStatus {
        if self.aim.is_some() {
            TurnStatus::Aiming
        } else if self.turn_taken || !self.all_stopped() {
            TurnStatus::Waiting
        } else {
            TurnStatus::Ready
        }
    }

    /// Put every disc back on its kickoff spot, at rest
    ///
    /// Spots are matched by role: the n-th Home piece in the roster takes the
    /// n-th Home spot, and so on. A piece with no spot stops where it is.
    pub fn reset_positions(&mut self) {
        let formation = &self.config.formation;
        let (mut home, mut away) = (0, 0);
        for disc in &mut self.discs {
            let role = disc.role();
            let slot = match role.side() {
                Some(Side::Home) => {
                    home += 1;
                    home - 1
                }
                Some(Side::Away) => {
                    away += 1;
                    away - 1
                }
                None => 0,
            };
            match formation.spot_for(role, slot) {
                Some(spot) => disc.place(spot),
                None => {
                    log::warn!("No kickoff spot for disc {} ({:?})", disc.id, role);
                    disc.place(disc.pos);
                }
            }
        }
        self.aim = None;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn build_roster(config: &MatchConfig) -> Vec<Disc> {
    let formation = &config.formation;
    let mut discs: Vec<Disc> = Vec::with_capacity(formation.home.len() + formation.away.len() + 1);

    // Disc ids follow roster order
    for &pos in &formation.home {
        let id = discs.len() as u32;
        discs.push(Disc::piece(id, Side::Home, pos, config.piece_radius));
    }
    for &pos in &formation.away {
        let id = discs.len() as u32;
        discs.push(Disc::piece(id, Side::Away, pos, config.piece_radius));
    }
    let id = discs.len() as u32;
    discs.push(Disc::ball(id, formation.ball, config.ball_radius));
    discs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_roster() {
        let state = MatchState::new(MatchConfig::arcade());
        assert_eq!(state.discs.len(), 7);
        assert_eq!(state.pieces_of(Side::Home).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(state.pieces_of(Side::Away).collect::<Vec<_>>(), vec![3, 4, 5]);
        let ball = state.ball().expect("ball");
        assert!(ball.role().is_ball());
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(state.current_player, Side::Home);
        assert_eq!(state.turn_status(), TurnStatus::Ready);

        let ids: Vec<u32> = state.discs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_arcade_pieces_stand_in_front_of_own_goal() {
        let state = MatchState::new(MatchConfig::arcade());
        for i in state.pieces_of(Side::Home) {
            assert_eq!(state.discs[i].pos.x, 160.0);
        }
        for i in state.pieces_of(Side::Away) {
            assert_eq!(state.discs[i].pos.x, -160.0);
        }
    }

    #[test]
    fn test_reset_positions_restores_formation() {
        let mut state = MatchState::new(MatchConfig::pitch());
        let kickoff: Vec<Vec2> = state.discs.iter().map(|d| d.pos).collect();

        for disc in &mut state.discs {
            disc.pos += Vec2::new(1.0, 0.5);
            disc.vel = Vec2::new(0.3, -0.2);
        }
        state.aim = Some(Aim {
            disc: 0,
            start: Vec2::ZERO,
        });
        assert!(!state.all_stopped());

        state.reset_positions();

        let after: Vec<Vec2> = state.discs.iter().map(|d| d.pos).collect();
        assert_eq!(after, kickoff);
        assert!(state.all_stopped());
        assert!(state.aim.is_none());
    }

    #[test]
    fn test_turn_status_waiting_while_moving() {
        let mut state = MatchState::new(MatchConfig::arcade());
        state.discs[6].vel = Vec2::new(2.0, 0.0);
        assert_eq!(state.turn_status(), TurnStatus::Waiting);
        assert!(!state.accepts_shot());
    }

    #[test]
    fn test_reset_matches_spots_by_role() {
        let mut state = MatchState::new(MatchConfig::arcade());
        let kickoff: Vec<Vec2> = state.discs.iter().map(|d| d.pos).collect();

        // A longer home line must not shift the away pieces or the ball
        state.config.formation.home.push(Vec2::new(300.0, 0.0));
        for disc in &mut state.discs {
            disc.pos = Vec2::new(10.0, 10.0);
        }
        state.reset_positions();

        let after: Vec<Vec2> = state.discs.iter().map(|d| d.pos).collect();
        assert_eq!(after, kickoff);
        assert_eq!(state.ball().map(|b| b.pos), Some(Vec2::ZERO));
    }

    #[test]
    fn test_reset_leaves_piece_without_spot() {
        let mut state = MatchState::new(MatchConfig::arcade());
        state.config.formation.away.pop();
        state.discs[5].pos = Vec2::new(-50.0, 20.0);
        state.discs[5].vel = Vec2::new(4.0, 0.0);

        state.reset_positions();

        assert_eq!(state.discs[5].pos, Vec2::new(-50.0, 20.0));
        assert_eq!(state.discs[5].vel, Vec2::ZERO);
        assert_eq!(state.discs[6].pos, Vec2::ZERO);
    }

    #[test]
    fn test_formation_off_field_rejected() {
        let field = Field::new(10.0, 5.0, 2.0);
        let formation = Formation {
            ball: Vec2::ZERO,
            home: vec![Vec2::new(9.8, 0.0), Vec2::new(6.0, -2.0), Vec2::new(6.0, 2.0)],
            away: vec![Vec2::new(-6.0, 0.0), Vec2::new(-6.0, -2.0), Vec2::new(-6.0, 2.0)],
        };
        let err = formation.validate(&field, 0.5, 0.5).expect_err("off field");
        assert!(err.to_string().contains("off the field"));
    }

    #[test]
    fn test_formation_needs_full_roster() {
        let field = Field::new(10.0, 5.0, 2.0);
        let formation = Formation {
            ball: Vec2::ZERO,
            home: vec![Vec2::new(6.0, 0.0)],
            away: vec![Vec2::new(-6.0, 0.0)],
        };
        let err = formation.validate(&field, 0.5, 0.5).expect_err("short roster");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("3 pieces per side"));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = MatchState::new(MatchConfig::arcade());
        state.push_event(GameEvent::TurnChanged { to: Side::Away });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
