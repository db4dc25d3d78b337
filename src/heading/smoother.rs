use crate::extensions::DegreesExt;
use tracing::trace;

pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.18;

/// First-order low-pass filter on the circle.
///
/// Each step closes `factor` of the shortest angular gap to the target, so a fixed target is approached
/// geometrically with ratio `1 - factor` along the shorter arc. The state lives for one session and is
/// never reset while it runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AngularSmoother {
    factor: f64,
    current_rotation_deg: f64,
}

impl AngularSmoother {
    /// Creates a smoother at rotation 0. `factor` must be in `(0, 1]`.
    pub fn new(factor: f64) -> Self {
        debug_assert!(factor > 0.0 && factor <= 1.0, "smoothing factor must be in (0, 1]");
        AngularSmoother {
            factor,
            current_rotation_deg: 0.0,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn current_rotation_deg(&self) -> f64 {
        self.current_rotation_deg
    }

    /// Moves the rotation toward `target_deg` and returns the new rotation.
    pub fn step(&mut self, target_deg: f64) -> f64 {
        let diff = target_deg.shortest_diff_from(self.current_rotation_deg);
        self.current_rotation_deg = (self.current_rotation_deg + diff * self.factor).normalize_360();
        trace!(target = target_deg, rotation = self.current_rotation_deg, "Smoothed rotation");
        self.current_rotation_deg
    }
}

impl Default for AngularSmoother {
    fn default() -> Self {
        AngularSmoother::new(DEFAULT_SMOOTHING_FACTOR)
    }
}
