use crate::face::FaceFrame;

/// Elliptical eye outline on one panel, cut by the eyelids.
///
/// Panel coordinates: +x right, +y down. The whole eye shifts with the
/// gaze target. `mirrored` flips the lid slant for the eye on the other
/// side of the nose; gaze is never mirrored, so both eyes look the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeMask {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub mirrored: bool,
}

impl EyeMask {
    /// Eye sized and placed for a `width` x `height` panel
    pub fn for_panel(width: u32, height: u32, mirrored: bool) -> Self {
        let (w, h) = (width as f64, height as f64);
        let center_x = if mirrored { w * 0.65 } else { w * 0.35 };
        Self {
            center_x,
            center_y: h * 0.5,
            radius_x: w * 0.2,
            radius_y: h * 0.32,
            mirrored,
        }
    }

    /// Brightness (0..=255) of pixel (`x`, `y`) for `frame`
    pub fn coverage(&self, frame: &FaceFrame, x: i32, y: i32) -> f64 {
        let bright = 255.0;
        if self.radius_x <= 0.0 || self.radius_y <= 0.0 {
            return 0.0;
        }

        let px = x as f64 - (self.center_x + frame.gaze.x);
        let py = y as f64 - (self.center_y + frame.gaze.y);
        let nx = px / self.radius_x;
        let ny = py / self.radius_y;
        let toward_nose = if self.mirrored { -nx } else { nx };

        let lid = frame.params.eyelid;
        let open_share = (1.0 - lid.top - lid.bottom).max(0.0);
        let top = lid.top + frame.lid_closure.clamp(0.0, 1.0) * open_share;
        let span = 2.0 * self.radius_y;

        let top_line = -self.radius_y + top * span + lid.slant * toward_nose * self.radius_y * 0.5;
        let bottom_line = self.radius_y - lid.bottom * span;

        // Distance inside each edge, in pixels
        let in_ellipse = (1.0 - nx.hypot(ny)) * self.radius_x.min(self.radius_y);
        let below_top = py - top_line;
        let above_bottom = bottom_line - py;

        let inside = in_ellipse.min(below_top).min(above_bottom);
        if inside <= 0.0 {
            0.0
        } else {
            bright * inside.min(1.0)
        }
    }
}
