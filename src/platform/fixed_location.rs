use crate::domain::GeoCoordinate;
use crate::platform::{LocationError, LocationProvider};
use crate::session::FixRequest;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Reports a configured position, or no position at all when none is configured.
#[derive(Debug)]
pub struct FixedLocationProvider {
    position: Option<GeoCoordinate>,
}

impl FixedLocationProvider {
    pub fn new(position: Option<GeoCoordinate>) -> Self {
        FixedLocationProvider { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    #[instrument(skip(self))]
    async fn current_position(&self, request: &FixRequest) -> Result<GeoCoordinate, LocationError> {
        debug!("📍 Reading configured position...");
        self.position
            .ok_or_else(|| LocationError::Unavailable("no position configured".to_string()))
    }
}
