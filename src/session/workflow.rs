use crate::app_config::{AppConfig, Compass, Location, Target};
use crate::domain::{PermissionKind, SessionError};
use crate::platform::{LocationError, LocationProvider, PermissionRequester, PlatformError};
use crate::session::Session;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Policy for the one-shot position fix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached position that is acceptable, zero means a fresh fix.
    pub maximum_age: Duration,
}

impl FixRequest {
    pub fn new(high_accuracy: bool, timeout: Duration) -> Self {
        FixRequest {
            high_accuracy,
            timeout,
            maximum_age: Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionSettings {
    pub target: Target,
    pub compass: Compass,
    pub location: Location,
}

impl From<&AppConfig> for SessionSettings {
    fn from(config: &AppConfig) -> Self {
        SessionSettings {
            target: config.target().clone(),
            compass: config.compass().clone(),
            location: config.location().clone(),
        }
    }
}

impl From<LocationError> for SessionError {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::PermissionDenied => SessionError::PermissionDenied(PermissionKind::Location),
            LocationError::Unavailable(reason) => SessionError::LocationUnavailable(reason),
            LocationError::Timeout(duration) => {
                SessionError::LocationUnavailable(format!("no position fix within {:?}", duration))
            }
        }
    }
}

/// Runs permission request, location fix and bearing computation in order.
#[instrument(skip_all)]
pub async fn establish_session(
    permissions: &dyn PermissionRequester,
    location: &dyn LocationProvider,
    settings: &SessionSettings,
) -> Result<Session, SessionError> {
    debug!("🔐 Requesting motion permission...");
    match permissions.request_motion_permission().await {
        Ok(true) => debug!("🔐 Requesting motion permission... OK"),
        Ok(false) => {
            warn!("🔐 Requesting motion permission... denied");
            return Err(SessionError::PermissionDenied(PermissionKind::Motion));
        }
        Err(PlatformError::Unsupported(reason)) => {
            debug!("🔐 Requesting motion permission... not required, {}", reason)
        }
        Err(PlatformError::Failed(reason)) => {
            warn!("🔐 Requesting motion permission... failed, {}", reason);
            return Err(SessionError::PermissionDenied(PermissionKind::Motion));
        }
    }

    let request = FixRequest::new(settings.location.high_accuracy(), settings.location.timeout());
    debug!(request = ?request, "📍 Requesting position fix...");
    let origin = match timeout(request.timeout, location.current_position(&request)).await {
        Ok(Ok(origin)) => origin,
        Ok(Err(error)) => {
            warn!("📍 Requesting position fix... failed, {}", error);
            return Err(error.into());
        }
        Err(_) => {
            warn!("📍 Requesting position fix... timed out after {:?}", request.timeout);
            return Err(LocationError::Timeout(request.timeout).into());
        }
    };
    debug!(origin = %origin, "📍 Requesting position fix... OK");

    let session = Session::new(origin, &settings.target, &settings.compass);
    info!(
        bearing = %session.bearing(),
        distance_km = format!("{:.0}", session.distance_km()),
        "🕋 Established session for {}",
        origin
    );

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::GeoCoordinate;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use test_log::test;

    #[derive(Debug)]
    struct StubPermission(Result<bool, PlatformError>);

    #[async_trait]
    impl PermissionRequester for StubPermission {
        async fn request_motion_permission(&self) -> Result<bool, PlatformError> {
            self.0.clone()
        }
    }

    #[derive(Debug, Default)]
    struct StubLocation {
        result: Option<Result<GeoCoordinate, LocationError>>,
        requests: Mutex<Vec<FixRequest>>,
    }

    #[async_trait]
    impl LocationProvider for StubLocation {
        async fn current_position(&self, request: &FixRequest) -> Result<GeoCoordinate, LocationError> {
            self.requests.lock().unwrap().push(*request);
            match &self.result {
                Some(result) => result.clone(),
                None => std::future::pending().await,
            }
        }
    }

    fn located_at(origin: GeoCoordinate) -> StubLocation {
        StubLocation {
            result: Some(Ok(origin)),
            ..StubLocation::default()
        }
    }

    fn settings() -> SessionSettings {
        SessionSettings::from(&AppConfigBuilder::new().build())
    }

    #[test(tokio::test)]
    async fn establishes_a_session_from_the_fix() {
        let location = located_at(GeoCoordinate::new(40.7128, -74.0060));

        let session = establish_session(&StubPermission(Ok(true)), &location, &settings()).await.unwrap();

        assert!((session.bearing().degrees() - 58.5).abs() < 0.1);
        assert_eq!(
            location.requests.lock().unwrap().as_slice(),
            &[FixRequest {
                high_accuracy: true,
                timeout: Duration::from_secs(15),
                maximum_age: Duration::ZERO,
            }]
        );
    }

    #[test(tokio::test)]
    async fn proceeds_when_no_permission_is_needed() {
        let permission = StubPermission(Err(PlatformError::Unsupported("no permission api".to_string())));
        let location = located_at(GeoCoordinate::new(51.5074, -0.1278));

        assert!(establish_session(&permission, &location, &settings()).await.is_ok());
    }

    #[test(tokio::test)]
    async fn fails_when_motion_permission_is_refused() {
        let location = located_at(GeoCoordinate::new(51.5074, -0.1278));

        let result = establish_session(&StubPermission(Ok(false)), &location, &settings()).await;

        assert_eq!(result.unwrap_err(), SessionError::PermissionDenied(PermissionKind::Motion));
        assert!(location.requests.lock().unwrap().is_empty(), "location must not be requested");
    }

    #[test(tokio::test)]
    async fn fails_when_the_permission_request_errors() {
        let permission = StubPermission(Err(PlatformError::Failed("prompt dismissed".to_string())));
        let location = located_at(GeoCoordinate::new(51.5074, -0.1278));

        let result = establish_session(&permission, &location, &settings()).await;

        assert_eq!(result.unwrap_err(), SessionError::PermissionDenied(PermissionKind::Motion));
    }

    #[test(tokio::test)]
    async fn maps_a_denied_location_to_a_location_permission_error() {
        let location = StubLocation {
            result: Some(Err(LocationError::PermissionDenied)),
            ..StubLocation::default()
        };

        let result = establish_session(&StubPermission(Ok(true)), &location, &settings()).await;

        assert_eq!(result.unwrap_err(), SessionError::PermissionDenied(PermissionKind::Location));
    }

    #[test(tokio::test)]
    async fn maps_a_missing_fix_to_location_unavailable() {
        let location = StubLocation {
            result: Some(Err(LocationError::Unavailable("geolocation not supported".to_string()))),
            ..StubLocation::default()
        };

        let error = establish_session(&StubPermission(Ok(true)), &location, &settings()).await.unwrap_err();

        assert_eq!(error, SessionError::LocationUnavailable("geolocation not supported".to_string()));
        assert_eq!(error.to_string(), "location unavailable: geolocation not supported");
    }

    #[test(tokio::test)]
    async fn bounds_the_wait_for_a_fix() {
        let config = AppConfigBuilder::new().location_timeout(Duration::from_millis(50)).build();
        let settings = SessionSettings::from(&config);

        let result = establish_session(&StubPermission(Ok(true)), &StubLocation::default(), &settings).await;

        assert_eq!(result.unwrap_err(), SessionError::LocationUnavailable("no position fix within 50ms".to_string()));
    }
}
