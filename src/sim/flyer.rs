//! Flyer physics: gravity integration, flap impulses, boundary policy
//!
//! The flyer's x never changes during a run; all motion is vertical.
//! Integration is semi-implicit Euler at one fixed step per tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Animation phase, derived from physics each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimPhase {
    Idle,
    Flapping,
    Diving,
    Crashed,
}

/// Result of clamping the flyer to the playable vertical band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContact {
    None,
    Ceiling,
    /// Floor contact terminates the run while playing
    Floor,
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    /// Fixed horizontal position for the run
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive is downward
    pub velocity: f32,
    /// Derived each tick from velocity, never integrated
    pub rotation: f32,
    pub radius: f32,
    pub anim: AnimPhase,
    /// Wing cycle phase while flapping, 0..=PI
    pub wing_phase: f32,
}

impl Flyer {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            x: field_width * FLYER_X_FRACTION,
            y: field_height / 2.0,
            velocity: 0.0,
            rotation: 0.0,
            radius: FLYER_RADIUS,
            anim: AnimPhase::Idle,
            wing_phase: 0.0,
        }
    }

    /// Absolute velocity reset - a flap always yields the same upward kick
    /// regardless of how fast the flyer was falling. The caller emits the
    /// flap feedback event.
    pub fn flap(&mut self) {
        self.velocity = FLAP_IMPULSE;
        self.anim = AnimPhase::Flapping;
        self.wing_phase = 0.0;
    }

    /// Advance vertical motion by one tick under difficulty-scaled gravity.
    pub fn apply_gravity(&mut self, difficulty: f32) {
        self.velocity += BASE_GRAVITY * difficulty;
        self.y += self.velocity;

        // Recomputed, not integrated, so it never lags the velocity
        self.rotation = (self.velocity / ROTATION_DIVISOR).clamp(-ROTATION_CLAMP, ROTATION_CLAMP);

        if self.anim == AnimPhase::Flapping {
            self.wing_phase += WING_FLAP_RATE;
            if self.wing_phase > std::f32::consts::PI {
                self.anim = AnimPhase::Idle;
                self.wing_phase = 0.0;
            }
        }

        // A fast fall reads as a dive even mid-flap
        if self.velocity > DIVE_VELOCITY {
            self.anim = AnimPhase::Diving;
        }
    }

    /// Clamp the flyer to `[radius, field_height - radius]`.
    ///
    /// Either contact zeroes the velocity. Only floor contact is reported as
    /// terminal; the ceiling is a soft stop.
    pub fn clamp_to_field(&mut self, field_height: f32) -> FieldContact {
        if self.y + self.radius > field_height {
            self.y = field_height - self.radius;
            self.velocity = 0.0;
            return FieldContact::Floor;
        }
        if self.y - self.radius < 0.0 {
            self.y = self.radius;
            self.velocity = 0.0;
            return FieldContact::Ceiling;
        }
        FieldContact::None
    }

    pub fn reset(&mut self, field_width: f32, field_height: f32) {
        *self = Self::new(field_width, field_height);
    }
}

/// Idle wing bob as a function of elapsed seconds. Purely cosmetic; renderers
/// may call this, the simulation never does.
pub fn idle_wing_angle(time_secs: f32) -> f32 {
    (time_secs * 10.0).sin() * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_integration() {
        let mut flyer = Flyer::new(800.0, 600.0);
        let y0 = flyer.y;
        flyer.apply_gravity(1.0);
        assert!((flyer.velocity - BASE_GRAVITY).abs() < 1e-6);
        assert!((flyer.y - (y0 + BASE_GRAVITY)).abs() < 1e-6);

        // Difficulty scales the pull
        let mut hard = Flyer::new(800.0, 600.0);
        hard.apply_gravity(2.0);
        assert!(hard.velocity > flyer.velocity);
    }

    #[test]
    fn test_flap_is_absolute_reset() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.velocity = 12.0;
        flyer.flap();
        assert!((flyer.velocity - FLAP_IMPULSE).abs() < 1e-6);
        assert_eq!(flyer.anim, AnimPhase::Flapping);

        // Flapping while already rising gives the identical kick
        flyer.flap();
        assert!((flyer.velocity - FLAP_IMPULSE).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_clamped() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.velocity = 100.0;
        flyer.apply_gravity(1.0);
        assert!((flyer.rotation - ROTATION_CLAMP).abs() < 1e-6);

        flyer.velocity = -100.0;
        flyer.apply_gravity(1.0);
        assert!((flyer.rotation - -ROTATION_CLAMP).abs() < 1e-6);
    }

    #[test]
    fn test_dive_overrides_flap_cycle() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.flap();
        flyer.velocity = DIVE_VELOCITY + 1.0;
        flyer.apply_gravity(1.0);
        assert_eq!(flyer.anim, AnimPhase::Diving);
    }

    #[test]
    fn test_flap_cycle_reverts_to_idle() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.flap();
        // PI / WING_FLAP_RATE is ~10.5 ticks; run a few extra
        for _ in 0..12 {
            flyer.apply_gravity(0.0);
        }
        assert_eq!(flyer.anim, AnimPhase::Idle);
        assert_eq!(flyer.wing_phase, 0.0);
    }

    #[test]
    fn test_floor_contact_clamps_and_reports() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.y = 700.0;
        flyer.velocity = 9.0;
        assert_eq!(flyer.clamp_to_field(600.0), FieldContact::Floor);
        assert!((flyer.y - (600.0 - flyer.radius)).abs() < 1e-6);
        assert_eq!(flyer.velocity, 0.0);
    }

    #[test]
    fn test_ceiling_contact_is_soft() {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.y = -50.0;
        flyer.velocity = -8.0;
        assert_eq!(flyer.clamp_to_field(600.0), FieldContact::Ceiling);
        assert!((flyer.y - flyer.radius).abs() < 1e-6);
        assert_eq!(flyer.velocity, 0.0);
    }
}
