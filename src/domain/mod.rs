mod bearing;
mod errors;
pub mod events;
mod geo_coordinate;
mod heading_sample;
mod raw_orientation;

pub use bearing::Bearing;
pub use errors::{PermissionKind, SessionError};
pub use geo_coordinate::GeoCoordinate;
pub use heading_sample::{HeadingSample, SourceKind};
pub use raw_orientation::{RawFrame, RawOrientationEvent};
