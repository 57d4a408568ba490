use tracing::info;

use super::Renderer;
use crate::face::FaceFrame;

/// Headless renderer: reports the face state through `tracing` every
/// `every` frames. Used when no LED matrix is attached.
pub struct TraceRenderer {
    every: u64,
    frames: u64,
    last: Option<FaceFrame>,
}

impl TraceRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last: None,
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FaceFrame> {
        self.last.as_ref()
    }
}

impl Renderer for TraceRenderer {
    fn name(&self) -> &str {
        "trace"
    }

    fn draw(&mut self, frame: &FaceFrame) {
        if self.frames % self.every == 0 {
            info!(
                "👁️  frame {} {:<11} gaze ({:>6.2}, {:>6.2}) lids {:.2} palette {}",
                self.frames,
                frame.expression.name(),
                frame.gaze.x,
                frame.gaze.y,
                frame.lid_closure,
                frame.params.palette.name()
            );
        }
        self.frames += 1;
        self.last = Some(*frame);
    }
}
