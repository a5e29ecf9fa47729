//! Fixed timestep match tick
//!
//! Core game loop that advances a match deterministically: take the
//! player's input, step the disc physics, handle goals, pass the turn.

use glam::Vec2;

use super::physics;
use super::shot::{pick_piece, shot_velocity};
use super::state::{Aim, GameEvent, MatchState};

/// Input commands for a single tick, in field coordinates (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer pressed this tick
    pub press: Option<Vec2>,
    /// Pointer released this tick
    pub release: Option<Vec2>,
}

impl TickInput {
    /// A complete flick in one tick: press on a piece, release elsewhere
    pub fn flick(press: Vec2, release: Vec2) -> Self {
        Self {
            press: Some(press),
            release: Some(release),
        }
    }
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.time_ticks += 1;

    // Start aiming: only once everything has stopped and the turn is unused
    if let Some(point) = input.press {
        if state.aim.is_none() && state.accepts_shot() {
            if let Some(disc) = pick_piece(&state.discs, state.current_player, point) {
                state.aim = Some(Aim { disc, start: point });
            }
        }
    }

    // Release: fire the selected piece
    let released = input.release.and_then(|point| state.aim.take().map(|aim| (aim, point)));
    if let Some((aim, point)) = released {
        let shot = state.config.shot;
        if let Some(vel) = shot_velocity(aim.start, point, &shot) {
            let disc = &mut state.discs[aim.disc];
            disc.vel = vel;
            state.turn_taken = true;

            log::debug!(
                "{} shoots disc {} at speed {:.2}",
                state.current_player.as_str(),
                disc.id,
                vel.length()
            );
            let event = GameEvent::ShotTaken {
                disc_id: disc.id,
                side: state.current_player,
                speed: vel.length(),
            };
            state.push_event(event);
        }
    }

    let field = state.config.field;
    let params = state.config.physics;
    let goals = physics::step(&mut state.discs, &field, &params);

    if let Some((goal, extra)) = goals.split_first() {
        for ignored in extra {
            log::warn!(
                "Ignoring second goal in tick {} (disc {}, {:?} end)",
                state.time_ticks,
                ignored.disc_id,
                ignored.end
            );
        }

        state.scoreboard.record(state.time_ticks, goal.scorer, goal.end);
        log::info!(
            "GOAL for {} at tick {} ({})",
            goal.scorer.as_str(),
            state.time_ticks,
            state.scoreboard.summary()
        );
        state.push_event(GameEvent::Goal(*goal));

        state.reset_positions();
        state.turn_taken = false;
    }

    // Pass the turn once the shot has fully played out
    if state.turn_taken && state.aim.is_none() && state.all_stopped() {
        state.current_player = state.current_player.opponent();
        state.turn_taken = false;
        log::info!("Turn passes to {}", state.current_player.as_str());
        state.push_event(GameEvent::TurnChanged {
            to: state.current_player,
        });
    }
}
