//! Procedural obstacle spawning with a hard spacing floor
//!
//! Cadence is handled by the tick's spawn timer; this module only decides
//! whether spacing allows a spawn and which variant to create.

use rand::Rng;

use super::obstacle::{GapPipe, Obstacle, OscillatingSlab, RotatingBlades};
use super::state::GameState;
use crate::consts::*;

/// Spawn one obstacle just beyond the trailing field edge, unless the most
/// recently spawned obstacle is still within `MIN_SPACING` of it.
///
/// The spacing check is independent of the cadence timer: however short the
/// difficulty-scaled interval gets, obstacles never spawn unfairly close.
pub fn maybe_spawn(state: &mut GameState) {
    if let Some(last) = state.obstacles.last() {
        if last.x() > state.field_width - MIN_SPACING {
            return;
        }
    }

    let x = state.field_width + SPAWN_MARGIN;
    let obstacle = random_obstacle(x, state);
    log::debug!("spawn {} at x={:.0}", obstacle.kind_name(), x);
    state.obstacles.push(obstacle);
}

/// Seed the initial field: exactly `INITIAL_OBSTACLES` obstacles, force
/// placed at successive multiples of `MIN_SPACING` beyond the field edge so
/// the first encounter is never instantaneous. Bypasses the spacing check
/// (the list is empty at run start).
pub fn seed_initial_obstacles(state: &mut GameState) {
    debug_assert!(state.obstacles.is_empty());
    for i in 1..=INITIAL_OBSTACLES {
        let x = state.field_width + i as f32 * MIN_SPACING;
        let obstacle = random_obstacle(x, state);
        state.obstacles.push(obstacle);
    }
}

/// Uniform choice among the three variants, built at the current difficulty
fn random_obstacle(x: f32, state: &mut GameState) -> Obstacle {
    let field_height = state.field_height;
    let difficulty = state.difficulty();

    match state.rng.random_range(0..3u32) {
        0 => Obstacle::GapPipe(GapPipe::new(x, field_height, difficulty, &mut state.rng)),
        1 => Obstacle::OscillatingSlab(OscillatingSlab::new(
            x,
            field_height,
            difficulty,
            &mut state.rng,
        )),
        _ => Obstacle::RotatingBlades(RotatingBlades::new(x, field_height, difficulty)),
    }
}
