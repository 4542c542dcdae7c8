//! Run state and core simulation types
//!
//! One `GameState` owns everything for a run: the flyer, the live obstacle
//! list, cosmetic particles and the seeded RNG. Restarting builds fresh
//! collections rather than resetting shared ones, so nothing leaks across
//! runs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacle::Obstacle;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, awaiting an explicit begin signal
    Start,
    /// Simulation active
    Playing,
    /// Run ended; state frozen until restart
    GameOver,
}

/// Environment theme, rotated on a fixed timer independent of score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnvTheme {
    #[default]
    Day,
    Night,
    City,
}

impl EnvTheme {
    pub fn next(self) -> Self {
        match self {
            EnvTheme::Day => EnvTheme::Night,
            EnvTheme::Night => EnvTheme::City,
            EnvTheme::City => EnvTheme::Day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvTheme::Day => "day",
            EnvTheme::Night => "night",
            EnvTheme::City => "city",
        }
    }
}

/// Fire-and-forget feedback signals for the host's audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flap,
    Score,
    Collision,
}

/// A cosmetic particle from the crash burst (never gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    /// Hue in degrees for the renderer's palette
    pub hue: f32,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-2.5..2.5), rng.random_range(-2.5..2.5)),
            life: PARTICLE_LIFE_TICKS,
            max_life: PARTICLE_LIFE_TICKS,
            size: rng.random_range(2.0..6.0),
            hue: rng.random_range(30.0..90.0),
        }
    }

    pub fn advance(&mut self) {
        self.vel.y += 0.2;
        self.pos += self.vel;
        self.life -= 1.0;
    }
}

/// Difficulty multiplier as a pure function of score.
///
/// This single multiplier hardens everything at once: gravity, obstacle
/// speed, gap size, blade rotation and spawn cadence.
#[inline]
pub fn difficulty_for_score(score: u32) -> f32 {
    1.0 + score as f32 * DIFFICULTY_PER_POINT
}

/// Frozen-format text values for the host's score labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudText {
    pub score: String,
    /// Elapsed time with one decimal, e.g. "12.3s"
    pub time: String,
    /// Integer distance, e.g. "24m"
    pub distance: String,
    pub high_score: String,
}

/// Complete state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Tick counter, authoritative game clock
    pub ticks: u64,
    pub env_theme: EnvTheme,
    /// Ticks since the last theme change
    pub env_timer: u32,
    pub flyer: Flyer,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    /// Best score seen, loaded at start and raised at most once per run
    pub high_score: u32,
    pub field_width: f32,
    pub field_height: f32,
    /// Ticks since the last spawn attempt
    pub spawn_timer: u32,
    /// Ticks the activation signal has been held past the press edge
    pub hold_timer: u32,
    /// Previous tick's activation sample, for press-edge detection
    pub held_last_tick: bool,
}

impl GameState {
    /// Create an idle game state with the default field size
    pub fn new(seed: u64) -> Self {
        Self::with_field(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT, seed)
    }

    pub fn with_field(field_width: f32, field_height: f32, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            ticks: 0,
            env_theme: EnvTheme::Day,
            env_timer: 0,
            flyer: Flyer::new(field_width, field_height),
            obstacles: Vec::new(),
            particles: Vec::new(),
            high_score: 0,
            field_width,
            field_height,
            spawn_timer: 0,
            hold_timer: 0,
            held_last_tick: false,
        }
    }

    /// Difficulty multiplier for the current score
    #[inline]
    pub fn difficulty(&self) -> f32 {
        difficulty_for_score(self.score)
    }

    /// Elapsed play time, quantized to `TIME_QUANTUM_SECS` steps
    pub fn elapsed_secs(&self) -> f32 {
        let quantum_ticks = (TIME_QUANTUM_SECS * TICKS_PER_SECOND as f32).round() as u64;
        (self.ticks / quantum_ticks) as f32 * TIME_QUANTUM_SECS
    }

    /// Distance covered, a pure function of elapsed time
    pub fn distance(&self) -> u32 {
        (self.elapsed_secs() * DISTANCE_RATE).floor() as u32
    }

    /// Text surface for the host's score/time/distance labels
    pub fn hud(&self) -> HudText {
        HudText {
            score: self.score.to_string(),
            time: format!("{:.1}s", self.elapsed_secs()),
            distance: format!("{}m", self.distance()),
            high_score: self.high_score.to_string(),
        }
    }

    /// Reset for a fresh run and enter `Playing`.
    ///
    /// Score, clock, difficulty inputs, theme, input timers, obstacles and
    /// particles all restart from scratch; the high score and RNG stream
    /// carry over.
    pub fn begin_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.ticks = 0;
        self.env_theme = EnvTheme::Day;
        self.env_timer = 0;
        self.flyer.reset(self.field_width, self.field_height);
        self.obstacles = Vec::new();
        self.particles = Vec::new();
        self.spawn_timer = 0;
        self.hold_timer = 0;
        self.held_last_tick = false;

        super::spawn::seed_initial_obstacles(self);
        log::info!("run start: seed={} high_score={}", self.seed, self.high_score);
    }

    /// Ticks per environment theme rotation
    pub(crate) fn env_cycle_ticks() -> u32 {
        (ENV_CYCLE_SECONDS * TICKS_PER_SECOND as f32) as u32
    }
}
