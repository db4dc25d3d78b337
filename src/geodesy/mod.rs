mod bearing_calculator;

pub use bearing_calculator::{EARTH_RADIUS_KM, compute_distance_km, compute_initial_bearing};
