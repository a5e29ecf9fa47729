//! Computer player for demo matches
//!
//! Plays whichever side has the turn: picks the piece closest to the ball and
//! flicks it through the "ghost ball" spot behind the ball, lined up with the
//! opponent's goal, with a little seeded noise on angle and power.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::field::End;
use super::state::MatchState;
use super::tick::TickInput;

/// Maximum aim error either way (radians)
const AIM_JITTER: f32 = 0.15;
/// Shot power range as a fraction of the cap
const POWER_RANGE: std::ops::Range<f32> = 0.35..1.0;

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    pub seed: u64,
    rng: Pcg32,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Input for the next tick; empty unless a shot can be taken
    pub fn next_input(&mut self, state: &MatchState) -> TickInput {
        if state.aim.is_some() || !state.accepts_shot() {
            return TickInput::default();
        }
        let Some(ball) = state.ball() else {
            return TickInput::default();
        };

        let side = state.current_player;
        let Some(shooter) = state.pieces_of(side).min_by(|&a, &b| {
            let da = state.discs[a].pos.distance_squared(ball.pos);
            let db = state.discs[b].pos.distance_squared(ball.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            return TickInput::default();
        };
        let piece = &state.discs[shooter];

        // Spot behind the ball on the line to the opponent's goal
        let target_end = End::defended_by(side.opponent());
        let goal = Vec2::new(target_end.direction() * state.config.field.half_length, 0.0);
        let to_goal = (goal - ball.pos).normalize_or_zero();
        let ghost = ball.pos - to_goal * (ball.radius() + piece.radius());

        let aim = (ghost - piece.pos).normalize_or(Vec2::X);
        let angle = self.rng.random_range(-AIM_JITTER..AIM_JITTER);
        let dir = Vec2::from_angle(angle).rotate(aim);

        let shot = &state.config.shot;
        let power = shot.max_power * self.rng.random_range(POWER_RANGE);
        let drag = (power / shot.scale).max(shot.min_drag * 1.5);

        log::debug!(
            "Autoplay {} picks disc {} (power {:.2})",
            side.as_str(),
            piece.id,
            power
        );
        TickInput::flick(piece.pos, piece.pos - dir * drag)
    }
}
