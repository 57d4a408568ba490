// Gaze geometry: where the pupils sit relative to their rest position

/// Pixel offset of the pupils from their rest position (+x right, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GazeTarget {
    pub x: f64,
    pub y: f64,
}

impl GazeTarget {
    pub const CENTER: GazeTarget = GazeTarget { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &GazeTarget) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Move towards `goal` by at most `max_step` pixels
    pub fn step_towards(&self, goal: &GazeTarget, max_step: f64) -> GazeTarget {
        let remaining = self.distance(goal);
        if remaining <= max_step || remaining == 0.0 {
            return *goal;
        }
        let t = max_step.max(0.0) / remaining;
        GazeTarget::new(
            self.x + (goal.x - self.x) * t,
            self.y + (goal.y - self.y) * t,
        )
    }
}

/// Elliptical bound on how far the pupils may travel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeEnvelope {
    pub max_x: f64,
    pub max_y: f64,
}

impl GazeEnvelope {
    // Slack for float error when testing points on the boundary
    const EPSILON: f64 = 1e-9;

    pub fn new(max_x: f64, max_y: f64) -> Self {
        Self {
            max_x: max_x.max(0.0),
            max_y: max_y.max(0.0),
        }
    }

    /// Envelope covering `fraction` of each display dimension
    pub fn for_display(width: u32, height: u32, fraction: f64) -> Self {
        Self::new(width as f64 * fraction, height as f64 * fraction)
    }

    /// Larger of the two radii; used to scale speeds
    pub fn radius(&self) -> f64 {
        self.max_x.max(self.max_y)
    }

    fn normalized(&self, target: &GazeTarget) -> f64 {
        let axis = |value: f64, radius: f64| {
            if radius > 0.0 {
                value / radius
            } else if value == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        };
        axis(target.x, self.max_x).hypot(axis(target.y, self.max_y))
    }

    pub fn contains(&self, target: &GazeTarget) -> bool {
        self.normalized(target) <= 1.0 + Self::EPSILON
    }

    /// Pull `target` back onto the ellipse if it lies outside
    pub fn clamp(&self, target: GazeTarget) -> GazeTarget {
        if self.contains(&target) {
            return target;
        }
        if self.max_x == 0.0 || self.max_y == 0.0 {
            return GazeTarget::new(
                target.x.clamp(-self.max_x, self.max_x),
                target.y.clamp(-self.max_y, self.max_y),
            );
        }
        let scale = self.normalized(&target);
        GazeTarget::new(target.x / scale, target.y / scale)
    }

    /// Point at polar position (`angle` radians, `r` in 0..=1 of the radii)
    pub fn point(&self, angle: f64, r: f64) -> GazeTarget {
        let r = r.clamp(0.0, 1.0);
        GazeTarget::new(angle.cos() * self.max_x * r, angle.sin() * self.max_y * r)
    }
}
