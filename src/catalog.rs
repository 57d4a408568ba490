// Expression catalog
// Static rendering parameters per expression. None of this affects gaze.

use crate::color::ColorPalette;
use crate::expression::Expression;

/// Eyelid posture, all values in eye-height units (0.0 = edge, 1.0 = full eye)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyelidShape {
    /// How far the upper lid hangs down
    pub top: f64,
    /// How far the lower lid pushes up
    pub bottom: f64,
    /// Upper lid tilt towards the nose; negative tilts outward
    pub slant: f64,
}

impl EyelidShape {
    pub const OPEN: EyelidShape = EyelidShape { top: 0.0, bottom: 0.0, slant: 0.0 };

    const fn new(top: f64, bottom: f64, slant: f64) -> Self {
        Self { top, bottom, slant }
    }
}

/// Blink animation cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkCadence {
    pub enabled: bool,
    pub interval_secs: f64,  // Seconds between blinks
    pub frames: u32,         // Frames to close, same again to open
}

impl Default for BlinkCadence {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 4.0,
            frames: 6,
        }
    }
}

impl BlinkCadence {
    const fn every(interval_secs: f64) -> Self {
        Self { enabled: true, interval_secs, frames: 6 }
    }

    const fn never() -> Self {
        Self { enabled: false, interval_secs: 0.0, frames: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub eyelid: EyelidShape,
    pub palette: ColorPalette,
    pub blink: BlinkCadence,
}

/// Rendering parameters for `expression`
pub fn render_params_for(expression: Expression) -> RenderParams {
    use ColorPalette::*;
    use Expression::*;

    let (eyelid, palette, blink) = match expression {
        Normal => (EyelidShape::OPEN, Forest, BlinkCadence::every(4.0)),
        Angry => (EyelidShape::new(0.35, 0.0, 0.5), Fire, BlinkCadence::every(6.0)),
        Glee => (EyelidShape::new(0.0, 0.55, 0.0), Rainbow, BlinkCadence::every(3.0)),
        Happy => (EyelidShape::new(0.0, 0.4, 0.0), Forest, BlinkCadence::every(3.5)),
        Sad => (EyelidShape::new(0.3, 0.0, -0.45), Ocean, BlinkCadence::every(5.0)),
        Worried => (EyelidShape::new(0.2, 0.0, -0.35), Ocean, BlinkCadence::every(2.5)),
        Focused => (EyelidShape::new(0.2, 0.2, 0.0), Forest, BlinkCadence::every(8.0)),
        Annoyed => (EyelidShape::new(0.45, 0.0, 0.15), Fire, BlinkCadence::every(5.0)),
        Surprised => (EyelidShape::OPEN, Purple, BlinkCadence::never()),
        Skeptic => (EyelidShape::new(0.4, 0.0, -0.2), Purple, BlinkCadence::every(5.0)),
        Frustrated => (EyelidShape::new(0.3, 0.15, 0.35), Fire, BlinkCadence::every(4.0)),
        Unimpressed => (EyelidShape::new(0.5, 0.0, 0.0), Ocean, BlinkCadence::every(6.0)),
        Sleepy => (EyelidShape::new(0.6, 0.1, -0.1), Ocean, BlinkCadence::never()),
        Suspicious => (EyelidShape::new(0.35, 0.3, 0.1), Purple, BlinkCadence::every(7.0)),
        Squint => (EyelidShape::new(0.4, 0.35, 0.0), Forest, BlinkCadence::every(6.0)),
        Furious => (EyelidShape::new(0.4, 0.1, 0.7), Fire, BlinkCadence::never()),
        Scared => (EyelidShape::new(0.0, 0.0, -0.5), Purple, BlinkCadence::every(1.5)),
        Awe => (EyelidShape::OPEN, Rainbow, BlinkCadence::every(6.0)),
        LookLeft | LookRight | LookUp | LookDown => {
            (EyelidShape::OPEN, Forest, BlinkCadence::default())
        }
    };

    RenderParams { eyelid, palette, blink }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lids_never_overlap() {
        for e in Expression::ALL {
            let lid = render_params_for(e).eyelid;
            assert!(lid.top + lid.bottom < 1.0, "{} closes the eye", e);
            assert!(lid.top >= 0.0 && lid.bottom >= 0.0);
        }
    }

    #[test]
    fn enabled_blinks_have_frames() {
        for e in Expression::ALL {
            let blink = render_params_for(e).blink;
            if blink.enabled {
                assert!(blink.frames > 0 && blink.interval_secs > 0.0, "{}", e);
            }
        }
    }

    #[test]
    fn directional_looks_keep_eyes_open() {
        for e in Expression::DIRECTIONAL {
            assert_eq!(render_params_for(e).eyelid, EyelidShape::OPEN);
        }
    }
}
