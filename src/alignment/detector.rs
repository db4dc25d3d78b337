use crate::extensions::DegreesExt;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ALIGN_TOLERANCE_DEG: f64 = 5.0;
pub const DEFAULT_ALIGN_COOLDOWN: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignmentState {
    Aligned,
    NotAligned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentUpdate {
    pub state: AlignmentState,
    /// Set only on a `NotAligned -> Aligned` edge that is outside the cooldown.
    pub trigger_feedback: bool,
}

impl AlignmentUpdate {
    pub fn is_aligned(&self) -> bool {
        self.state == AlignmentState::Aligned
    }
}

/// Decides when the heading lines up with the target bearing.
///
/// A single tolerance separates the two states, there is no separate exit threshold. Feedback fires on the
/// edge into `Aligned` only, and only if the previous trigger is more than `cooldown` ago.
#[derive(Clone, Debug)]
pub struct AlignmentDetector {
    tolerance_deg: f64,
    cooldown: Duration,
    is_aligned: bool,
    last_trigger_at: Option<DateTime<Utc>>,
}

impl AlignmentDetector {
    pub fn new(tolerance_deg: f64, cooldown: Duration) -> Self {
        AlignmentDetector {
            tolerance_deg,
            cooldown,
            is_aligned: false,
            last_trigger_at: None,
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.is_aligned
    }

    pub fn last_trigger_at(&self) -> Option<DateTime<Utc>> {
        self.last_trigger_at
    }

    /// Updates the state from the current heading relative to the target bearing.
    pub fn evaluate(&mut self, target_bearing_deg: f64, heading_deg: f64, now: DateTime<Utc>) -> AlignmentUpdate {
        let diff_abs = target_bearing_deg.shortest_diff_from(heading_deg).abs();
        self.update(diff_abs, now)
    }

    /// Updates the state from the absolute angular offset to the target.
    pub fn update(&mut self, diff_abs: f64, now: DateTime<Utc>) -> AlignmentUpdate {
        let aligned = diff_abs <= self.tolerance_deg;
        let trigger_feedback = aligned && !self.is_aligned && self.cooldown_elapsed(now);

        if trigger_feedback {
            debug!(offset = diff_abs, "🎯 Aligned with target, triggering feedback");
            self.last_trigger_at = Some(now);
        }
        self.is_aligned = aligned;

        AlignmentUpdate {
            state: if aligned { AlignmentState::Aligned } else { AlignmentState::NotAligned },
            trigger_feedback,
        }
    }

    fn cooldown_elapsed(&self, now: DateTime<Utc>) -> bool {
        let Some(last_trigger_at) = self.last_trigger_at else {
            return true;
        };

        // A clock that went backwards yields a negative delta, which never counts as elapsed
        now.signed_duration_since(last_trigger_at)
            .to_std()
            .is_ok_and(|elapsed| elapsed > self.cooldown)
    }
}

impl Default for AlignmentDetector {
    fn default() -> Self {
        AlignmentDetector::new(DEFAULT_ALIGN_TOLERANCE_DEG, DEFAULT_ALIGN_COOLDOWN)
    }
}
