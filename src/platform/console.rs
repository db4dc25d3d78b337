use crate::platform::{FeedbackSink, IndicatorView, PlatformError};
use crate::session::StatusLines;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Renders the indicator as log lines.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl IndicatorView for ConsoleView {
    fn rotate(&self, rotation_deg: f64) {
        debug!(rotation = format!("{:.1}", rotation_deg), "🧭 Rotated indicator");
    }

    fn show_status(&self, status: &StatusLines) {
        info!("{}", status.heading);
        info!("{}", status.accuracy);
    }

    fn set_aligned(&self, aligned: bool) {
        trace!(aligned, "🧭 Alignment flag");
    }
}

/// Logs feedback requests instead of playing them.
#[derive(Debug, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn pulse(&self, duration: Duration) -> Result<(), PlatformError> {
        info!(duration = ?duration, "📳 Haptic pulse");
        Ok(())
    }

    fn play_cue(&self) -> Result<(), PlatformError> {
        info!("🔔 Tick");
        Ok(())
    }
}
