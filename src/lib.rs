//! Qibla compass: the bearing to a fixed reference point and a live, smoothed indicator that tracks the device
//! heading against it.

pub mod alignment;
pub mod app_config;
pub mod compass;
pub mod domain;
pub mod extensions;
mod geo_coordinate_deserializer;
pub mod geodesy;
pub mod heading;
pub mod platform;
pub mod session;
