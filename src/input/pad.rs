use crate::expression::{Direction, Expression};

/// Controller buttons the face reacts to, independent of the input driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    Look(Direction),
    NextMood,
    PreviousMood,
    ResetMood,
}

/// Turns button presses and releases into expression changes.
///
/// Looks are held: the most recently pressed direction still down wins,
/// and the mood returns only once every direction is released.
#[derive(Debug, Clone, Default)]
pub struct LookPad {
    mood: Expression,
    held: Vec<Direction>,
}

fn look_expression(direction: Direction) -> Expression {
    match direction {
        Direction::Left => Expression::LookLeft,
        Direction::Right => Expression::LookRight,
        Direction::Up => Expression::LookUp,
        Direction::Down => Expression::LookDown,
    }
}

impl LookPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Expression {
        self.mood
    }

    /// Expression the face should show right now
    pub fn current(&self) -> Expression {
        match self.held.last() {
            Some(direction) => look_expression(*direction),
            None => self.mood,
        }
    }

    pub fn press(&mut self, button: PadButton) -> Option<Expression> {
        match button {
            PadButton::Look(direction) => {
                self.held.retain(|d| *d != direction);
                self.held.push(direction);
                return Some(self.current());
            }
            PadButton::NextMood => self.mood = self.mood.next(),
            PadButton::PreviousMood => self.mood = self.mood.previous(),
            PadButton::ResetMood => self.mood = Expression::Normal,
        }
        // A held look keeps the gaze; the new mood applies on release
        if self.held.is_empty() {
            Some(self.mood)
        } else {
            None
        }
    }

    pub fn release(&mut self, button: PadButton) -> Option<Expression> {
        let PadButton::Look(direction) = button else {
            return None;
        };
        let was_top = self.held.last() == Some(&direction);
        self.held.retain(|d| *d != direction);
        if was_top {
            Some(self.current())
        } else {
            None
        }
    }
}
