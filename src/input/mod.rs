// Expression change sources polled once per frame
pub mod pad;
pub mod script;
#[cfg(feature = "gamepad")]
pub mod gamepad;

pub use pad::{LookPad, PadButton};
pub use script::ScriptedSource;
#[cfg(feature = "gamepad")]
pub use gamepad::GamepadSource;

use crate::expression::Expression;

pub trait ExpressionSource {
    fn name(&self) -> &str;

    /// Non-blocking; `dt` is the time since the previous poll.
    /// Returns an expression to switch to, if any.
    fn poll(&mut self, dt: f64) -> Option<Expression>;
}
