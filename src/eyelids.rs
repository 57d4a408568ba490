use crate::catalog::BlinkCadence;

/// Frame-counted blink animation.
///
/// Waits `interval_secs` with the lids open, then closes over `frames`
/// ticks and reopens over the same number.
#[derive(Debug, Clone)]
pub struct Blink {
    waited_secs: f64,
    blink_frame: u32,
    closing: bool,
    active: bool,
}

impl Default for Blink {
    fn default() -> Self {
        Self::new()
    }
}

impl Blink {
    pub fn new() -> Self {
        Self {
            waited_secs: 0.0,
            blink_frame: 0,
            closing: true,
            active: false,
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.active
    }

    /// Abort any blink in progress and restart the interval
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one frame; returns lid closure, 0.0 open to 1.0 shut
    pub fn tick(&mut self, dt: f64, cadence: &BlinkCadence) -> f64 {
        if !cadence.enabled || cadence.frames == 0 {
            self.reset();
            return 0.0;
        }

        if !self.active {
            self.waited_secs += dt.max(0.0);
            if self.waited_secs < cadence.interval_secs {
                return 0.0;
            }
            self.active = true;
            self.closing = true;
            self.blink_frame = 0;
        }

        if self.closing {
            self.blink_frame += 1;
            if self.blink_frame >= cadence.frames {
                self.blink_frame = cadence.frames;
                self.closing = false;
            }
        } else {
            self.blink_frame = self.blink_frame.saturating_sub(1);
            if self.blink_frame == 0 {
                self.reset();
                return 0.0;
            }
        }

        self.blink_frame as f64 / cadence.frames as f64
    }
}
