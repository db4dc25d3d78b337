use crate::domain::GeoCoordinate;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    target: Target,
    compass: Compass,
    location: Location,
    permissions: Permissions,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("QIBLA").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.core.event_buffer_size == 0 {
            return Err(ConfigError::Message("invalid core.event_buffer_size: 0, must be at least 1".to_string()));
        }

        let factor = self.compass.smoothing_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::Message(format!(
                "invalid compass.smoothing_factor: {}, must be in (0, 1]",
                factor
            )));
        }

        if !(self.compass.align_tolerance_deg >= 0.0) {
            return Err(ConfigError::Message(format!(
                "invalid compass.align_tolerance_deg: {}, must not be negative",
                self.compass.align_tolerance_deg
            )));
        }

        Ok(())
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn compass(&self) -> &Compass {
        &self.compass
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Target {
    name: String,
    position: GeoCoordinate,
}

impl Target {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GeoCoordinate {
        self.position
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Compass {
    smoothing_factor: f64,
    align_tolerance_deg: f64,
    #[serde(with = "humantime_serde")]
    align_cooldown: Duration,
    #[serde(with = "humantime_serde")]
    haptic_pulse: Duration,
}

impl Compass {
    pub fn smoothing_factor(&self) -> f64 {
        self.smoothing_factor
    }

    pub fn align_tolerance_deg(&self) -> f64 {
        self.align_tolerance_deg
    }

    pub fn align_cooldown(&self) -> Duration {
        self.align_cooldown
    }

    pub fn haptic_pulse(&self) -> Duration {
        self.haptic_pulse
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Location {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    high_accuracy: bool,
    origin: Option<GeoCoordinate>,
}

impl Location {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn high_accuracy(&self) -> bool {
        self.high_accuracy
    }

    pub fn origin(&self) -> Option<GeoCoordinate> {
        self.origin
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Permissions {
    motion_granted: bool,
}

impl Permissions {
    pub fn motion_granted(&self) -> bool {
        self.motion_granted
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 16 },
                target: Target {
                    name: "Kaaba".to_string(),
                    position: GeoCoordinate::new(21.4225, 39.8262),
                },
                compass: Compass {
                    smoothing_factor: 0.18,
                    align_tolerance_deg: 5.0,
                    align_cooldown: Duration::from_millis(4000),
                    haptic_pulse: Duration::from_millis(80),
                },
                location: Location {
                    timeout: Duration::from_secs(15),
                    high_accuracy: true,
                    origin: Some(GeoCoordinate::new(40.7128, -74.0060)),
                },
                permissions: Permissions { motion_granted: true },
            },
        }
    }

    pub fn smoothing_factor(mut self, factor: f64) -> Self {
        self.config.compass.smoothing_factor = factor;
        self
    }

    pub fn align_tolerance_deg(mut self, tolerance: f64) -> Self {
        self.config.compass.align_tolerance_deg = tolerance;
        self
    }

    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.config.core.event_buffer_size = size;
        self
    }

    pub fn location_timeout(mut self, timeout: Duration) -> Self {
        self.config.location.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
