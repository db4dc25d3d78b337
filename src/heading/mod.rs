mod normalizer;
mod smoother;

pub use normalizer::{ABSOLUTE_PLATFORM_LABEL, RELATIVE_LABEL, normalize, normalize_event};
pub use smoother::{AngularSmoother, DEFAULT_SMOOTHING_FACTOR};
