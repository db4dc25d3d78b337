mod angle_ext;

pub use angle_ext::{DegreesExt, normalize_360, shortest_angle_diff};
