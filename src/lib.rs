// Vector eyes face controller
// Maps an expression to gaze and eyelid posture, one frame at a time.

// Module declarations
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod expression;
pub mod eyelids;
pub mod face;
pub mod gaze;
pub mod input;
pub mod look;
pub mod render;

// Re-export the types a host loop needs
pub use catalog::{render_params_for, RenderParams};
pub use config::{FaceConfig, WanderConfig};
pub use error::{ConfigError, UnknownExpression};
pub use expression::{Direction, Expression, ExpressionClass};
pub use face::{FaceFrame, LookState, VectorFace};
pub use gaze::{GazeEnvelope, GazeTarget};
pub use look::{LookController, WanderStrategy};

// Hardware constants
pub const PANEL_WIDTH: u32 = 64;
pub const PANEL_HEIGHT: u32 = 32;
pub const DEFAULT_FPS: u32 = 60;
