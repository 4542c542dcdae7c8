//! Obstacle variants and their collision geometry
//!
//! A closed sum type over the three variants keeps the per-tick pass
//! exhaustive: every variant owns its motion update and collision predicate.
//! All variants scroll left at a speed fixed when they are spawned
//! (base speed times the difficulty at that moment) and never change their
//! own horizontal velocity afterwards.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use crate::consts::*;

/// Vertical gap between a top and bottom pipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapPipe {
    pub x: f32,
    pub width: f32,
    /// Height of the top pipe == top edge of the gap
    pub gap_top: f32,
    pub gap: f32,
    pub speed: f32,
    pub passed: bool,
}

impl GapPipe {
    pub fn new(x: f32, field_height: f32, difficulty: f32, rng: &mut impl Rng) -> Self {
        let gap = (PIPE_BASE_GAP - (difficulty - 1.0) * PIPE_GAP_SHRINK).max(PIPE_MIN_GAP);

        // Guard the random placement so the gap always stays inside the
        // playable band, even on short fields.
        let top_min = PIPE_EDGE_MARGIN;
        let top_max = (field_height - gap - PIPE_EDGE_MARGIN).max(top_min);
        let gap_top = if top_max > top_min {
            rng.random_range(top_min..top_max)
        } else {
            top_min
        };

        Self {
            x,
            width: OBSTACLE_WIDTH,
            gap_top,
            gap,
            speed: BASE_SCROLL_SPEED * difficulty,
            passed: false,
        }
    }

    fn collides_with(&self, flyer: &Flyer) -> bool {
        let overlaps_x = flyer.x + flyer.radius > self.x && flyer.x - flyer.radius < self.x + self.width;
        if !overlaps_x {
            return false;
        }
        // Safe only while the flyer's full vertical extent sits inside the gap
        flyer.y - flyer.radius < self.gap_top || flyer.y + flyer.radius > self.gap_top + self.gap
    }
}

/// Fixed-height rectangle bobbing sinusoidally around the field's midline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscillatingSlab {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub center_y: f32,
    /// Current vertical center, recomputed from phase each tick
    pub y: f32,
    pub amplitude: f32,
    pub phase: f32,
    pub speed: f32,
    pub passed: bool,
}

impl OscillatingSlab {
    pub fn new(x: f32, field_height: f32, difficulty: f32, rng: &mut impl Rng) -> Self {
        let center_y = field_height / 2.0;
        Self {
            x,
            width: OBSTACLE_WIDTH,
            height: SLAB_HEIGHT,
            center_y,
            y: center_y,
            amplitude: SLAB_AMPLITUDE,
            // Random seed phase desynchronizes slabs from each other
            phase: rng.random_range(0.0..100.0),
            speed: BASE_SCROLL_SPEED * difficulty,
            passed: false,
        }
    }

    fn advance(&mut self) {
        self.phase += SLAB_FREQUENCY;
        self.y = self.center_y + self.phase.sin() * self.amplitude;
    }

    fn collides_with(&self, flyer: &Flyer) -> bool {
        // Flyer's bounding circle treated as a box for the AABB test
        flyer.x + flyer.radius > self.x
            && flyer.x - flyer.radius < self.x + self.width
            && flyer.y + flyer.radius > self.y - self.height / 2.0
            && flyer.y - flyer.radius < self.y + self.height / 2.0
    }
}

/// Four radial blades at 90 degree intervals around a hub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatingBlades {
    /// Hub center
    pub x: f32,
    pub y: f32,
    pub blade_length: f32,
    pub blade_width: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub speed: f32,
    pub passed: bool,
}

impl RotatingBlades {
    pub fn new(x: f32, field_height: f32, difficulty: f32) -> Self {
        Self {
            x,
            y: field_height / 2.0,
            blade_length: BLADE_LENGTH,
            blade_width: BLADE_WIDTH,
            angle: 0.0,
            angular_speed: BLADE_BASE_ROTATION * difficulty,
            speed: BASE_SCROLL_SPEED * difficulty,
            passed: false,
        }
    }

    fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Safe hub, dangerous ring: inside the hub's immediate radius there is
    /// no collision; within the blade band the flyer must stay clear of all
    /// four blade angles.
    fn collides_with(&self, flyer: &Flyer) -> bool {
        let dx = flyer.x - self.x;
        let dy = flyer.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance >= self.blade_length + flyer.radius || distance <= HUB_RADIUS {
            return false;
        }

        let relative = (dy.atan2(dx) - self.angle).rem_euclid(TAU);
        for blade in [0.0, FRAC_PI_2, PI, PI + FRAC_PI_2] {
            let diff = (relative - blade).abs();
            if diff < BLADE_ANGULAR_TOLERANCE || diff > TAU - BLADE_ANGULAR_TOLERANCE {
                return true;
            }
        }
        false
    }
}

/// Tagged union over the three obstacle variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Obstacle {
    GapPipe(GapPipe),
    OscillatingSlab(OscillatingSlab),
    RotatingBlades(RotatingBlades),
}

impl Obstacle {
    /// Advance one tick of horizontal scroll plus variant-specific motion
    pub fn advance(&mut self) {
        match self {
            Obstacle::GapPipe(pipe) => pipe.x -= pipe.speed,
            Obstacle::OscillatingSlab(slab) => {
                slab.x -= slab.speed;
                slab.advance();
            }
            Obstacle::RotatingBlades(blades) => {
                blades.x -= blades.speed;
                blades.advance();
            }
        }
    }

    pub fn collides_with(&self, flyer: &Flyer) -> bool {
        match self {
            Obstacle::GapPipe(pipe) => pipe.collides_with(flyer),
            Obstacle::OscillatingSlab(slab) => slab.collides_with(flyer),
            Obstacle::RotatingBlades(blades) => blades.collides_with(flyer),
        }
    }

    /// Horizontal position as placed by the spawner; spacing is enforced on
    /// this value, not on the variant's visual extent
    pub fn x(&self) -> f32 {
        match self {
            Obstacle::GapPipe(pipe) => pipe.x,
            Obstacle::OscillatingSlab(slab) => slab.x,
            Obstacle::RotatingBlades(blades) => blades.x,
        }
    }

    /// Front boundary relative to scroll direction
    pub fn leading_edge(&self) -> f32 {
        match self {
            Obstacle::GapPipe(pipe) => pipe.x,
            Obstacle::OscillatingSlab(slab) => slab.x,
            Obstacle::RotatingBlades(blades) => blades.x - blades.blade_length,
        }
    }

    /// Rear boundary relative to scroll direction; scoring and pruning both
    /// key off this edge
    pub fn trailing_edge(&self) -> f32 {
        match self {
            Obstacle::GapPipe(pipe) => pipe.x + pipe.width,
            Obstacle::OscillatingSlab(slab) => slab.x + slab.width,
            Obstacle::RotatingBlades(blades) => blades.x + blades.blade_length,
        }
    }

    pub fn passed(&self) -> bool {
        match self {
            Obstacle::GapPipe(pipe) => pipe.passed,
            Obstacle::OscillatingSlab(slab) => slab.passed,
            Obstacle::RotatingBlades(blades) => blades.passed,
        }
    }

    pub fn mark_passed(&mut self) {
        match self {
            Obstacle::GapPipe(pipe) => pipe.passed = true,
            Obstacle::OscillatingSlab(slab) => slab.passed = true,
            Obstacle::RotatingBlades(blades) => blades.passed = true,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Obstacle::GapPipe(_) => "gap_pipe",
            Obstacle::OscillatingSlab(_) => "oscillating_slab",
            Obstacle::RotatingBlades(_) => "rotating_blades",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn flyer_at(x: f32, y: f32) -> Flyer {
        let mut flyer = Flyer::new(800.0, 600.0);
        flyer.x = x;
        flyer.y = y;
        flyer
    }

    #[test]
    fn test_pipe_gap_is_safe_edges_are_not() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pipe = GapPipe::new(150.0, 600.0, 1.0, &mut rng);
        pipe.gap_top = 200.0;
        pipe.gap = 200.0;

        // Fully inside the gap, horizontally overlapping: no collision
        let inside = flyer_at(160.0, 300.0);
        assert!(!pipe.collides_with(&inside));

        // One unit above the gap's top edge: collision
        let above = flyer_at(160.0, pipe.gap_top + inside.radius - 1.0);
        assert!(pipe.collides_with(&above));

        // Below the gap's bottom edge: collision
        let below = flyer_at(160.0, pipe.gap_top + pipe.gap - inside.radius + 1.0);
        assert!(pipe.collides_with(&below));

        // No horizontal overlap: never a collision
        let far = flyer_at(500.0, pipe.gap_top + 1.0);
        assert!(!pipe.collides_with(&far));
    }

    #[test]
    fn test_pipe_placement_stays_in_field() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let pipe = GapPipe::new(900.0, 600.0, 5.0, &mut rng);
            assert!(pipe.gap >= PIPE_MIN_GAP);
            assert!(pipe.gap_top >= PIPE_EDGE_MARGIN);
            assert!(pipe.gap_top + pipe.gap <= 600.0);
        }
    }

    #[test]
    fn test_pipe_placement_degenerate_field() {
        // Field too short for gap + margins: placement collapses to the
        // lower bound instead of panicking on an empty range
        let mut rng = Pcg32::seed_from_u64(1);
        let pipe = GapPipe::new(900.0, 250.0, 1.0, &mut rng);
        assert_eq!(pipe.gap_top, PIPE_EDGE_MARGIN);
    }

    #[test]
    fn test_slab_tracks_sine() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut slab = OscillatingSlab::new(400.0, 600.0, 1.0, &mut rng);
        slab.advance();
        let expected = slab.center_y + slab.phase.sin() * slab.amplitude;
        assert!((slab.y - expected).abs() < 1e-6);
        assert!(slab.y >= slab.center_y - slab.amplitude);
        assert!(slab.y <= slab.center_y + slab.amplitude);
    }

    #[test]
    fn test_slab_rect_overlap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut slab = OscillatingSlab::new(150.0, 600.0, 1.0, &mut rng);
        slab.y = 300.0;

        assert!(slab.collides_with(&flyer_at(160.0, 300.0)));
        // Just clear above the slab's top edge
        assert!(!slab.collides_with(&flyer_at(160.0, 300.0 - slab.height / 2.0 - 21.0)));
        // Overlapping vertically but not horizontally
        assert!(!slab.collides_with(&flyer_at(400.0, 300.0)));
    }

    #[test]
    fn test_blades_hub_is_safe() {
        let blades = RotatingBlades::new(150.0, 600.0, 1.0);
        // Dead center on the hub, blade at angle 0 pointing at it
        let at_hub = flyer_at(150.0 + HUB_RADIUS - 1.0, 300.0);
        assert!(!blades.collides_with(&at_hub));
    }

    #[test]
    fn test_blades_ring_is_dangerous_on_blade() {
        let blades = RotatingBlades::new(150.0, 600.0, 1.0);
        // Flyer due right of the hub, blade 0 at angle 0: aligned
        let on_blade = flyer_at(150.0 + 60.0, 300.0);
        assert!(blades.collides_with(&on_blade));
    }

    #[test]
    fn test_blades_ring_safe_between_blades() {
        let mut blades = RotatingBlades::new(150.0, 600.0, 1.0);
        // Rotate the cross 45 degrees so no blade points right
        blades.angle = std::f32::consts::FRAC_PI_4;
        let between = flyer_at(150.0 + 60.0, 300.0);
        assert!(!blades.collides_with(&between));
    }

    #[test]
    fn test_blades_angular_tolerance_band() {
        let blades = RotatingBlades::new(150.0, 600.0, 1.0);
        let dist = 60.0;
        // Just inside the tolerance band around blade 0
        let inside_angle = BLADE_ANGULAR_TOLERANCE - 0.01;
        let inside = flyer_at(
            150.0 + dist * inside_angle.cos(),
            300.0 + dist * inside_angle.sin(),
        );
        assert!(blades.collides_with(&inside));

        // Just outside it
        let outside_angle = BLADE_ANGULAR_TOLERANCE + 0.05;
        let outside = flyer_at(
            150.0 + dist * outside_angle.cos(),
            300.0 + dist * outside_angle.sin(),
        );
        assert!(!blades.collides_with(&outside));
    }

    #[test]
    fn test_advance_scrolls_left_only() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut obstacles = vec![
            Obstacle::GapPipe(GapPipe::new(400.0, 600.0, 2.0, &mut rng)),
            Obstacle::OscillatingSlab(OscillatingSlab::new(400.0, 600.0, 2.0, &mut rng)),
            Obstacle::RotatingBlades(RotatingBlades::new(400.0, 600.0, 2.0)),
        ];
        for obstacle in &mut obstacles {
            let before = obstacle.leading_edge();
            obstacle.advance();
            let moved = before - obstacle.leading_edge();
            assert!((moved - BASE_SCROLL_SPEED * 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_edges_bracket_geometry() {
        let mut rng = Pcg32::seed_from_u64(5);
        let pipe = Obstacle::GapPipe(GapPipe::new(400.0, 600.0, 1.0, &mut rng));
        assert!((pipe.trailing_edge() - pipe.leading_edge() - OBSTACLE_WIDTH).abs() < 1e-6);

        let blades = Obstacle::RotatingBlades(RotatingBlades::new(400.0, 600.0, 1.0));
        assert!((blades.trailing_edge() - 500.0).abs() < 1e-6);
        assert!((blades.leading_edge() - 300.0).abs() < 1e-6);
    }
}
