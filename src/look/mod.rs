// Gaze wander strategies
pub mod base;
mod saccade;

pub use base::WanderStrategy;
pub use saccade::SaccadeWander;

use tracing::trace;

use crate::gaze::{GazeEnvelope, GazeTarget};

/// Owns the pupils' position and the autonomous wander that moves it.
///
/// Enablement is flipped only by the face that owns this controller.
/// Outside the crate the controller is read-only.
pub struct LookController {
    enabled: bool,
    current: GazeTarget,
    envelope: GazeEnvelope,
    max_tick_secs: f64,
    strategy: Box<dyn WanderStrategy>,
}

impl LookController {
    /// `max_tick_secs` caps the dt a single tick may consume; zero or
    /// negative means uncapped.
    pub fn new(envelope: GazeEnvelope, max_tick_secs: f64, strategy: Box<dyn WanderStrategy>) -> Self {
        Self {
            enabled: true,
            current: GazeTarget::CENTER,
            envelope,
            max_tick_secs,
            strategy,
        }
    }

    /// Resume wandering from wherever the pupils are now
    pub(crate) fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.strategy.resume(self.current);
    }

    /// Stop wandering; the current target stays where it is
    pub(crate) fn disable(&mut self) {
        self.enabled = false;
    }

    /// Overwrite the target directly, whether or not wandering is enabled
    pub(crate) fn set_fixed_target(&mut self, target: GazeTarget) {
        self.current = target;
    }

    pub fn is_random_look_enabled(&self) -> bool {
        self.enabled
    }

    pub fn current_target(&self) -> GazeTarget {
        self.current
    }

    pub fn envelope(&self) -> &GazeEnvelope {
        &self.envelope
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Advance the wander by `dt` seconds. No-op while disabled.
    pub fn tick(&mut self, dt: f64) -> GazeTarget {
        if !self.enabled {
            return self.current;
        }
        let dt = if self.max_tick_secs > 0.0 {
            dt.clamp(0.0, self.max_tick_secs)
        } else {
            dt.max(0.0)
        };
        self.current = self.strategy.advance(dt, self.current, &self.envelope);
        trace!("Gaze ({:.2}, {:.2})", self.current.x, self.current.y);
        self.current
    }
}
