//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, one step per host frame callback
//! - Seeded RNG only, owned by the run state
//! - No rendering, audio or platform dependencies

pub mod flyer;
pub mod obstacle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use flyer::{AnimPhase, FieldContact, Flyer};
pub use obstacle::{GapPipe, Obstacle, OscillatingSlab, RotatingBlades};
pub use spawn::{maybe_spawn, seed_initial_obstacles};
pub use state::{
    EnvTheme, GameEvent, GamePhase, GameState, HudText, Particle, difficulty_for_score,
};
pub use tick::{TickInput, tick};
