use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::base::WanderStrategy;
use crate::config::WanderConfig;
use crate::gaze::{GazeEnvelope, GazeTarget};

/// Saccade wander: fixate for a random hold, then glide to a new random
/// point inside the envelope at a capped speed.
pub struct SaccadeWander {
    rng: StdRng,
    config: WanderConfig,
    goal: GazeTarget,
    hold_remaining: f64,
}

impl SaccadeWander {
    pub fn new(config: WanderConfig, rng: StdRng) -> Self {
        Self {
            rng,
            config,
            goal: GazeTarget::CENTER,
            // First saccade happens after a normal fixation, not on frame one
            hold_remaining: config.min_hold_secs,
        }
    }

    pub fn from_seed(config: WanderConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn goal(&self) -> GazeTarget {
        self.goal
    }

    fn pick_hold(&mut self) -> f64 {
        let WanderConfig { min_hold_secs: min, max_hold_secs: max, .. } = self.config;
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    fn pick_goal(&mut self, envelope: &GazeEnvelope) -> GazeTarget {
        let angle = self.rng.gen_range(0.0..TAU);
        // sqrt keeps picks uniform over the ellipse area instead of bunching at center
        let r: f64 = self.rng.gen::<f64>().sqrt();
        envelope.point(angle, r)
    }
}

impl WanderStrategy for SaccadeWander {
    fn name(&self) -> &str {
        "Saccade"
    }

    fn advance(&mut self, dt: f64, current: GazeTarget, envelope: &GazeEnvelope) -> GazeTarget {
        let dt = dt.max(0.0);
        self.hold_remaining -= dt;
        if self.hold_remaining <= 0.0 {
            self.goal = self.pick_goal(envelope);
            self.hold_remaining = self.pick_hold();
            debug!(
                "Saccade to ({:.2}, {:.2}), hold {:.2}s",
                self.goal.x, self.goal.y, self.hold_remaining
            );
        }

        let max_step = self.config.speed * envelope.radius() * dt;
        envelope.clamp(current.step_towards(&self.goal, max_step))
    }

    fn resume(&mut self, from: GazeTarget) {
        // Linger on the held direction before the next saccade
        self.goal = from;
        self.hold_remaining = self.pick_hold();
    }
}
