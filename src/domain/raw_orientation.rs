use serde::Deserialize;

/// A platform orientation frame as delivered by the sensor stream, before its shape is known.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    pub compass_heading: Option<f64>,
    pub compass_accuracy: Option<f64>,
    pub alpha: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawOrientationEvent {
    /// True-north compass heading with an optional accuracy in degrees.
    Absolute { heading: f64, accuracy: Option<f64> },
    /// Rotation around the vertical axis, counter-clockwise.
    Relative { alpha: f64 },
}

impl RawOrientationEvent {
    /// Establishes the shape of a frame. A compass heading wins over `alpha` when both are present.
    pub fn from_frame(frame: &RawFrame) -> Option<Self> {
        let finite = |value: Option<f64>| value.filter(|v| v.is_finite());

        if let Some(heading) = finite(frame.compass_heading) {
            return Some(RawOrientationEvent::Absolute {
                heading,
                accuracy: finite(frame.compass_accuracy),
            });
        }

        finite(frame.alpha).map(|alpha| RawOrientationEvent::Relative { alpha })
    }
}
