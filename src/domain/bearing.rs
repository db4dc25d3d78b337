use crate::extensions::DegreesExt;
use std::fmt::Display;

/// Clockwise angle from true north, always in `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Bearing(f64);

impl Bearing {
    pub fn new(degrees: f64) -> Self {
        Bearing(degrees.normalize_360())
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}°", self.0)
    }
}
