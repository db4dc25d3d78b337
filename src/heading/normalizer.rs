use crate::domain::{HeadingSample, RawFrame, RawOrientationEvent, SourceKind};
use crate::extensions::DegreesExt;

/// Accuracy label for absolute frames that carry no accuracy value.
pub const ABSOLUTE_PLATFORM_LABEL: &str = "iOS";

/// Accuracy label for relative frames, which have no external calibration.
pub const RELATIVE_LABEL: &str = "relative";

/// Converts a raw platform frame into a heading sample, or `None` if the frame has no recognized shape.
pub fn normalize(frame: &RawFrame) -> Option<HeadingSample> {
    RawOrientationEvent::from_frame(frame).map(normalize_event)
}

pub fn normalize_event(event: RawOrientationEvent) -> HeadingSample {
    match event {
        RawOrientationEvent::Absolute { heading, accuracy } => HeadingSample {
            heading_deg: heading.normalize_360(),
            accuracy_label: Some(match accuracy {
                Some(accuracy) => format!("{:.0}°", accuracy),
                None => ABSOLUTE_PLATFORM_LABEL.to_string(),
            }),
            source: SourceKind::Absolute,
        },
        RawOrientationEvent::Relative { alpha } => HeadingSample {
            heading_deg: (360.0 - alpha).normalize_360(),
            accuracy_label: Some(RELATIVE_LABEL.to_string()),
            source: SourceKind::Relative,
        },
    }
}
