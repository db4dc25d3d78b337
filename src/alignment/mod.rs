mod detector;

pub use detector::{
    AlignmentDetector, AlignmentState, AlignmentUpdate, DEFAULT_ALIGN_COOLDOWN, DEFAULT_ALIGN_TOLERANCE_DEG,
};
