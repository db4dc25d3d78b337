use std::fmt::Display;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,  // In degrees, [-90, 90]
    pub longitude: f64, // In degrees, [-180, 180]
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
