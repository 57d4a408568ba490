use crate::gaze::{GazeEnvelope, GazeTarget};

/// Base trait for autonomous gaze wander algorithms.
///
/// Implementations must keep the returned target inside `envelope` and
/// move it by a bounded amount per call, so resuming from any position
/// never produces a visible jump.
pub trait WanderStrategy: Send {
    /// Get the name of this strategy
    fn name(&self) -> &str;

    /// Advance by `dt` seconds from `current` and return the new target
    fn advance(&mut self, dt: f64, current: GazeTarget, envelope: &GazeEnvelope) -> GazeTarget;

    /// Called when wandering resumes after a fixed gaze held the pupils at `from`
    fn resume(&mut self, _from: GazeTarget) {}
}
