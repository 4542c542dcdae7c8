//! Per-tick pipeline and game state machine
//!
//! One call per host frame. While `Playing` the order is fixed: clock, then
//! environment/difficulty, then input policy, then flyer physics, then the
//! collision and scoring pass (which may end the run), then pruning and the
//! spawn cadence. A terminal event stops all further game-logic mutation for
//! that tick.

use glam::Vec2;

use super::flyer::{AnimPhase, FieldContact};
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, Particle};
use crate::consts::*;

/// Input sample for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Binary activation signal, sampled once per tick. Press edges flap
    /// immediately; a continuous hold auto-flaps on a tick cadence.
    pub held: bool,
    /// Explicit begin/restart signal; a no-op while playing
    pub begin: bool,
}

/// Advance the game by one tick, returning the feedback events it produced.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            // Activation is a no-op outside Playing
            if input.begin {
                state.begin_run();
            }
            // Carry the sample so a hold surviving a restart is not an edge
            state.held_last_tick = input.held;
            advance_particles(state);
        }

        GamePhase::Playing => {
            state.ticks += 1;

            // Theme rotation runs on its own timer, independent of score
            state.env_timer += 1;
            if state.env_timer >= GameState::env_cycle_ticks() {
                state.env_theme = state.env_theme.next();
                state.env_timer = 0;
                log::debug!("environment -> {}", state.env_theme.as_str());
            }

            let difficulty = state.difficulty();

            // Held-input repeat-flap policy. The repeat counter is ticks,
            // not wall time, so auto-flap cadence follows the frame rate.
            if input.held {
                if !state.held_last_tick {
                    state.flyer.flap();
                    state.hold_timer = 0;
                    events.push(GameEvent::Flap);
                } else {
                    state.hold_timer += 1;
                    if state.hold_timer > HOLD_REPEAT_TICKS {
                        state.flyer.flap();
                        state.hold_timer = 0;
                        events.push(GameEvent::Flap);
                    }
                }
            } else {
                state.hold_timer = 0;
            }
            state.held_last_tick = input.held;

            state.flyer.apply_gravity(difficulty);
            if state.flyer.clamp_to_field(state.field_height) == FieldContact::Floor {
                enter_game_over(state, &mut events);
                return events;
            }

            // Collision and scoring pass, in spawn order. The score check
            // precedes the collision check so an obstacle passed and hit in
            // the same tick still counts before the run ends.
            let mut terminated = false;
            let flyer_x = state.flyer.x;
            for obstacle in &mut state.obstacles {
                obstacle.advance();

                if !obstacle.passed() && obstacle.trailing_edge() < flyer_x {
                    obstacle.mark_passed();
                    state.score += 1;
                    events.push(GameEvent::Score);
                }

                if obstacle.collides_with(&state.flyer) {
                    terminated = true;
                    break;
                }
            }
            if terminated {
                enter_game_over(state, &mut events);
                return events;
            }

            // Discard obstacles fully behind the field
            state
                .obstacles
                .retain(|o| o.trailing_edge() > -OFFSCREEN_MARGIN);

            // Difficulty shortens the cadence; the spacing floor may still
            // veto the actual spawn
            state.spawn_timer += 1;
            if state.spawn_timer as f32 > BASE_SPAWN_INTERVAL / difficulty {
                spawn::maybe_spawn(state);
                state.spawn_timer = 0;
            }

            advance_particles(state);
        }
    }

    events
}

/// `Playing -> GameOver`: freeze the run, burst cosmetic particles and
/// settle the high score, all exactly once.
fn enter_game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.flyer.anim = AnimPhase::Crashed;
    events.push(GameEvent::Collision);

    let pos = Vec2::new(state.flyer.x, state.flyer.y);
    for _ in 0..CRASH_PARTICLES {
        let particle = Particle::new(pos, &mut state.rng);
        state.particles.push(particle);
    }

    if state.score > state.high_score {
        state.high_score = state.score;
        log::info!("game over: score={} (new best)", state.score);
    } else {
        log::info!(
            "game over: score={} high_score={}",
            state.score,
            state.high_score
        );
    }
}

/// Cosmetic particles animate in every phase and never touch gameplay
fn advance_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.advance();
    }
    state.particles.retain(|p| p.life > 0.0);
}
