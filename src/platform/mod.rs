//! Collaborators the compass core talks to: permissions, the location fix, rendering and feedback playback.

mod console;
mod fixed_location;
mod frame_reader;
mod permission;

use crate::domain::GeoCoordinate;
use crate::session::{FixRequest, StatusLines};
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

pub use console::{ConsoleView, LogFeedback};
pub use fixed_location::FixedLocationProvider;
pub use frame_reader::read_frames;
pub use permission::ConfiguredPermission;

#[async_trait]
pub trait PermissionRequester: Debug + Send + Sync {
    /// Asks for access to the motion sensors, `Ok(false)` means the user refused.
    async fn request_motion_permission(&self) -> Result<bool, PlatformError>;
}

#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    /// Requests a single position fix.
    async fn current_position(&self, request: &FixRequest) -> Result<GeoCoordinate, LocationError>;
}

pub trait IndicatorView: Debug + Send + Sync {
    fn rotate(&self, rotation_deg: f64);

    fn show_status(&self, status: &StatusLines);

    fn set_aligned(&self, aligned: bool);
}

pub trait FeedbackSink: Debug + Send + Sync {
    fn pulse(&self, duration: Duration) -> Result<(), PlatformError>;

    fn play_cue(&self) -> Result<(), PlatformError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("no position fix within {0:?}")]
    Timeout(Duration),
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[error("capability not supported: {0}")]
    Unsupported(String),
    #[error("platform call failed: {0}")]
    Failed(String),
}
