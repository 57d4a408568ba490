use tracing::debug;

use super::ExpressionSource;
use crate::expression::Expression;

/// Plays a looping list of (expression, hold seconds) steps.
/// Drives the face when no controller is attached.
pub struct ScriptedSource {
    steps: Vec<(Expression, f64)>,
    index: usize,
    elapsed: f64,
    started: bool,
}

impl ScriptedSource {
    pub fn new(steps: Vec<(Expression, f64)>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed: 0.0,
            started: false,
        }
    }

    /// Demo loop touching every look direction between moods
    pub fn demo() -> Self {
        use Expression::*;
        Self::new(vec![
            (Normal, 6.0),
            (LookLeft, 1.5),
            (LookRight, 1.5),
            (Happy, 5.0),
            (LookUp, 1.5),
            (Suspicious, 4.0),
            (LookDown, 1.5),
            (Sleepy, 5.0),
            (Surprised, 3.0),
            (Angry, 4.0),
        ])
    }
}

impl ExpressionSource for ScriptedSource {
    fn name(&self) -> &str {
        "script"
    }

    fn poll(&mut self, dt: f64) -> Option<Expression> {
        if self.steps.is_empty() {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.steps[0].0);
        }

        self.elapsed += dt.max(0.0);
        let hold = self.steps[self.index].1;
        if self.elapsed < hold {
            return None;
        }
        self.elapsed -= hold;
        self.index = (self.index + 1) % self.steps.len();
        let next = self.steps[self.index].0;
        debug!("Script step {} -> {}", self.index, next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_steps_in_order_and_loops() {
        let mut source = ScriptedSource::new(vec![
            (Expression::Normal, 1.0),
            (Expression::LookLeft, 0.5),
        ]);
        assert_eq!(source.poll(0.0), Some(Expression::Normal));
        assert_eq!(source.poll(0.5), None);
        assert_eq!(source.poll(0.5), Some(Expression::LookLeft));
        assert_eq!(source.poll(0.25), None);
        assert_eq!(source.poll(0.25), Some(Expression::Normal));
    }

    #[test]
    fn empty_script_is_silent() {
        let mut source = ScriptedSource::new(Vec::new());
        assert_eq!(source.poll(10.0), None);
    }

    #[test]
    fn demo_visits_every_direction() {
        let source = ScriptedSource::demo();
        for e in Expression::DIRECTIONAL {
            assert!(source.steps.iter().any(|(s, _)| *s == e), "{} missing", e);
        }
    }
}
