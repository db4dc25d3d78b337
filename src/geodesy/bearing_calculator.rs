//! Great-circle bearing and distance on a spherical Earth.
//!
//! Distances are accurate to roughly 0.5% since the Earth is treated as a sphere.

use crate::domain::{Bearing, GeoCoordinate};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the initial bearing of the great circle from `origin` to `target`.
///
/// An origin at a pole is not special-cased, `atan2` still yields a defined value there.
pub fn compute_initial_bearing(origin: &GeoCoordinate, target: &GeoCoordinate) -> Bearing {
    let lat1 = origin.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let delta_lon = (target.longitude - origin.longitude).to_radians();

    let angle = delta_lon.sin().atan2(lat1.cos() * lat2.tan() - lat1.sin() * delta_lon.cos());

    Bearing::new(angle.to_degrees())
}

/// Returns the haversine distance between `origin` and `target` in kilometers.
pub fn compute_distance_km(origin: &GeoCoordinate, target: &GeoCoordinate) -> f64 {
    let delta_lat = (target.latitude - origin.latitude).to_radians();
    let delta_lon = (target.longitude - origin.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin.latitude.to_radians().cos() * target.latitude.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
