//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (roster index order)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod disc;
pub mod field;
pub mod physics;
pub mod shot;
pub mod state;
pub mod tick;

pub use autoplay::AutoPlayer;
pub use collision::{Contact, discs_collide, resolve_all, resolve_collision};
pub use disc::{Disc, DiscRole, Side};
pub use field::{End, Field, Goal};
pub use physics::{PhysicsParams, advance_disc, all_stopped, apply_friction, step};
pub use shot::{ShotParams, pick_piece, preview_power, shot_velocity};
pub use state::{Aim, Formation, GameEvent, MatchState, TurnStatus};
pub use tick::{TickInput, tick};
