//! Skyflap - a flappy-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flyer physics, obstacles, game state)
//! - `highscores`: Persisted best-score record
//!
//! Rendering, audio synthesis and DOM wiring are external collaborators: the
//! host drives `sim::tick` once per frame, reads the run state to draw, and
//! forwards the returned [`sim::GameEvent`]s to its audio layer.

pub mod highscores;
pub mod sim;

pub use highscores::HighScore;
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Simulation rate assumed for the host's per-frame callback
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default field dimensions (hosts may pass their own)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Flyer defaults - x is fixed per run at this fraction of field width
    pub const FLYER_X_FRACTION: f32 = 0.2;
    pub const FLYER_RADIUS: f32 = 20.0;
    /// Downward acceleration per tick, scaled by difficulty
    pub const BASE_GRAVITY: f32 = 0.4;
    /// Flap sets velocity to this value outright (not additive)
    pub const FLAP_IMPULSE: f32 = -8.0;
    /// Velocity above which the flyer is considered diving
    pub const DIVE_VELOCITY: f32 = 5.0;
    /// Wing phase advance per tick while flapping; the cycle ends at PI
    pub const WING_FLAP_RATE: f32 = 0.3;
    /// Rotation is velocity / ROTATION_DIVISOR clamped to +/- ROTATION_CLAMP
    pub const ROTATION_DIVISOR: f32 = 20.0;
    pub const ROTATION_CLAMP: f32 = 0.5;

    /// Pipe and slab width
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Gap pipe: gap = PIPE_BASE_GAP - (difficulty - 1) * PIPE_GAP_SHRINK
    pub const PIPE_BASE_GAP: f32 = 200.0;
    pub const PIPE_GAP_SHRINK: f32 = 5.0;
    /// Hard floor on gap size regardless of difficulty
    pub const PIPE_MIN_GAP: f32 = 80.0;
    /// Margin kept above and below the random gap placement
    pub const PIPE_EDGE_MARGIN: f32 = 100.0;

    /// Oscillating slab geometry and motion
    pub const SLAB_HEIGHT: f32 = 80.0;
    pub const SLAB_AMPLITUDE: f32 = 120.0;
    pub const SLAB_FREQUENCY: f32 = 0.015;

    /// Rotating blades geometry and motion
    pub const BLADE_LENGTH: f32 = 100.0;
    pub const BLADE_WIDTH: f32 = 25.0;
    /// The hub itself is not a collision region
    pub const HUB_RADIUS: f32 = 20.0;
    /// Angular speed per tick, scaled by difficulty
    pub const BLADE_BASE_ROTATION: f32 = 0.03;
    /// Angular half-width of the blade danger band (gameplay balance, tunable)
    pub const BLADE_ANGULAR_TOLERANCE: f32 = 0.3;

    /// Horizontal scroll speed per tick, scaled by difficulty at spawn time
    pub const BASE_SCROLL_SPEED: f32 = 1.5;

    /// Minimum horizontal distance between consecutively spawned obstacles
    pub const MIN_SPACING: f32 = 350.0;
    /// Obstacles spawn this far beyond the trailing field edge
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Spawn cadence in ticks, divided by difficulty
    pub const BASE_SPAWN_INTERVAL: f32 = 150.0;
    /// Obstacles are pruned once their trailing edge is this far off-field
    pub const OFFSCREEN_MARGIN: f32 = 100.0;
    /// Obstacles seeded at run start
    pub const INITIAL_OBSTACLES: u32 = 3;

    /// Difficulty = 1 + score * DIFFICULTY_PER_POINT
    pub const DIFFICULTY_PER_POINT: f32 = 0.01;

    /// Environment theme rotation period
    pub const ENV_CYCLE_SECONDS: f32 = 20.0;

    /// Auto-flap cadence in ticks while the activation signal is held
    pub const HOLD_REPEAT_TICKS: u32 = 15;

    /// Elapsed time is quantized to this step
    pub const TIME_QUANTUM_SECS: f32 = 0.1;
    /// Distance = floor(elapsed seconds * DISTANCE_RATE)
    pub const DISTANCE_RATE: f32 = 2.0;

    /// Cosmetic particle burst size on game over
    pub const CRASH_PARTICLES: u32 = 20;
    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE_TICKS: f32 = 30.0;
}
