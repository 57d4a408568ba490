use std::fmt;
use std::str::FromStr;

use crate::error::UnknownExpression;
use crate::gaze::{GazeEnvelope, GazeTarget};

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Every expression the face can hold.
///
/// The four `Look*` values are directional: they pin the gaze. Everything
/// else is autonomous and lets the eyes wander. Use [`Expression::class`]
/// rather than matching on the `Look*` variants directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Expression {
    #[default]
    Normal,
    Angry,
    Glee,
    Happy,
    Sad,
    Worried,
    Focused,
    Annoyed,
    Surprised,
    Skeptic,
    Frustrated,
    Unimpressed,
    Sleepy,
    Suspicious,
    Squint,
    Furious,
    Scared,
    Awe,
    LookLeft,
    LookRight,
    LookUp,
    LookDown,
}

/// Fixed gaze direction held by a directional expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The two disjoint expression classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionClass {
    Autonomous,
    Directional(Direction),
}

impl ExpressionClass {
    pub fn is_directional(&self) -> bool {
        matches!(self, ExpressionClass::Directional(_))
    }
}

impl Expression {
    pub const ALL: [Expression; 22] = [
        Expression::Normal,
        Expression::Angry,
        Expression::Glee,
        Expression::Happy,
        Expression::Sad,
        Expression::Worried,
        Expression::Focused,
        Expression::Annoyed,
        Expression::Surprised,
        Expression::Skeptic,
        Expression::Frustrated,
        Expression::Unimpressed,
        Expression::Sleepy,
        Expression::Suspicious,
        Expression::Squint,
        Expression::Furious,
        Expression::Scared,
        Expression::Awe,
        Expression::LookLeft,
        Expression::LookRight,
        Expression::LookUp,
        Expression::LookDown,
    ];

    /// Autonomous expressions in cycling order (first 18 of `ALL`)
    pub const AUTONOMOUS: [Expression; 18] = [
        Expression::Normal,
        Expression::Angry,
        Expression::Glee,
        Expression::Happy,
        Expression::Sad,
        Expression::Worried,
        Expression::Focused,
        Expression::Annoyed,
        Expression::Surprised,
        Expression::Skeptic,
        Expression::Frustrated,
        Expression::Unimpressed,
        Expression::Sleepy,
        Expression::Suspicious,
        Expression::Squint,
        Expression::Furious,
        Expression::Scared,
        Expression::Awe,
    ];

    pub const DIRECTIONAL: [Expression; 4] = [
        Expression::LookLeft,
        Expression::LookRight,
        Expression::LookUp,
        Expression::LookDown,
    ];

    /// The single classification point for the autonomous/directional split
    pub fn class(self) -> ExpressionClass {
        match self {
            Expression::LookLeft => ExpressionClass::Directional(Direction::Left),
            Expression::LookRight => ExpressionClass::Directional(Direction::Right),
            Expression::LookUp => ExpressionClass::Directional(Direction::Up),
            Expression::LookDown => ExpressionClass::Directional(Direction::Down),
            Expression::Normal
            | Expression::Angry
            | Expression::Glee
            | Expression::Happy
            | Expression::Sad
            | Expression::Worried
            | Expression::Focused
            | Expression::Annoyed
            | Expression::Surprised
            | Expression::Skeptic
            | Expression::Frustrated
            | Expression::Unimpressed
            | Expression::Sleepy
            | Expression::Suspicious
            | Expression::Squint
            | Expression::Furious
            | Expression::Scared
            | Expression::Awe => ExpressionClass::Autonomous,
        }
    }

    pub fn is_directional(self) -> bool {
        self.class().is_directional()
    }

    pub fn direction(self) -> Option<Direction> {
        match self.class() {
            ExpressionClass::Directional(direction) => Some(direction),
            ExpressionClass::Autonomous => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Expression::Normal => "Normal",
            Expression::Angry => "Angry",
            Expression::Glee => "Glee",
            Expression::Happy => "Happy",
            Expression::Sad => "Sad",
            Expression::Worried => "Worried",
            Expression::Focused => "Focused",
            Expression::Annoyed => "Annoyed",
            Expression::Surprised => "Surprised",
            Expression::Skeptic => "Skeptic",
            Expression::Frustrated => "Frustrated",
            Expression::Unimpressed => "Unimpressed",
            Expression::Sleepy => "Sleepy",
            Expression::Suspicious => "Suspicious",
            Expression::Squint => "Squint",
            Expression::Furious => "Furious",
            Expression::Scared => "Scared",
            Expression::Awe => "Awe",
            Expression::LookLeft => "LookLeft",
            Expression::LookRight => "LookRight",
            Expression::LookUp => "LookUp",
            Expression::LookDown => "LookDown",
        }
    }

    /// Next autonomous expression, wrapping. Directional values restart at Normal.
    pub fn next(&self) -> Self {
        match Self::AUTONOMOUS.iter().position(|e| e == self) {
            Some(i) => Self::AUTONOMOUS[(i + 1) % Self::AUTONOMOUS.len()],
            None => Expression::Normal,
        }
    }

    /// Previous autonomous expression, wrapping. Directional values restart at Normal.
    pub fn previous(&self) -> Self {
        let len = Self::AUTONOMOUS.len();
        match Self::AUTONOMOUS.iter().position(|e| e == self) {
            Some(i) => Self::AUTONOMOUS[(i + len - 1) % len],
            None => Expression::Normal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Expression {
    type Err = UnknownExpression;

    // Accepts "LookLeft", "lookleft" and "look_left"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownExpression(s.to_string()))
    }
}

impl Direction {
    /// Fixed gaze offset for this direction, at the edge of the envelope.
    /// Screen coordinates: +x right, +y down.
    pub fn offset(&self, envelope: &GazeEnvelope) -> GazeTarget {
        match self {
            Direction::Left => GazeTarget::new(-envelope.max_x, 0.0),
            Direction::Right => GazeTarget::new(envelope.max_x, 0.0),
            Direction::Up => GazeTarget::new(0.0, -envelope.max_y),
            Direction::Down => GazeTarget::new(0.0, envelope.max_y),
        }
    }
}
