// Frame consumers
pub mod shape;
pub mod trace;
#[cfg(feature = "matrix")]
pub mod matrix;

pub use shape::EyeMask;
pub use trace::TraceRenderer;
#[cfg(feature = "matrix")]
pub use matrix::MatrixRenderer;

use crate::face::FaceFrame;

/// Anything that can present a face frame
pub trait Renderer {
    fn name(&self) -> &str;

    /// Draw one frame. Called once per tick, after the face has advanced.
    fn draw(&mut self, frame: &FaceFrame);
}
