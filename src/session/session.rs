use crate::alignment::AlignmentDetector;
use crate::app_config::{Compass, Target};
use crate::domain::{Bearing, GeoCoordinate, HeadingSample};
use crate::extensions::DegreesExt;
use crate::geodesy::{compute_distance_km, compute_initial_bearing};
use crate::heading::AngularSmoother;
use crate::session::status::{self, StatusLines};
use chrono::{DateTime, Utc};

/// State of one compass session, from the location fix until the session is stopped.
///
/// The bearing is fixed at construction, establishing a new one means creating a new session.
#[derive(Debug)]
pub struct Session {
    target_name: String,
    origin: GeoCoordinate,
    bearing: Bearing,
    distance_km: f64,
    smoother: AngularSmoother,
    detector: AlignmentDetector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionUpdate {
    /// Rotation to apply to the indicator, in degrees.
    pub rotation_deg: f64,
    pub aligned: bool,
    pub trigger_feedback: bool,
    pub status: StatusLines,
}

impl Session {
    pub fn new(origin: GeoCoordinate, target: &Target, compass: &Compass) -> Self {
        let position = target.position();
        Session {
            target_name: target.name().to_string(),
            origin,
            bearing: compute_initial_bearing(&origin, &position),
            distance_km: compute_distance_km(&origin, &position),
            smoother: AngularSmoother::new(compass.smoothing_factor()),
            detector: AlignmentDetector::new(compass.align_tolerance_deg(), compass.align_cooldown()),
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn origin(&self) -> GeoCoordinate {
        self.origin
    }

    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn rotation_deg(&self) -> f64 {
        self.smoother.current_rotation_deg()
    }

    pub fn is_aligned(&self) -> bool {
        self.detector.is_aligned()
    }

    pub fn established_status(&self) -> StatusLines {
        status::established(&self.target_name, self.bearing, self.distance_km)
    }

    /// Feeds one heading sample through the smoother and the alignment detector.
    pub fn process(&mut self, sample: &HeadingSample, now: DateTime<Utc>) -> SessionUpdate {
        let needle_deg = (self.bearing.degrees() - sample.heading_deg).normalize_360();
        let rotation_deg = self.smoother.step(needle_deg);
        let alignment = self.detector.evaluate(self.bearing.degrees(), sample.heading_deg, now);

        SessionUpdate {
            rotation_deg,
            aligned: alignment.is_aligned(),
            trigger_feedback: alignment.trigger_feedback,
            status: StatusLines {
                heading: status::heading_line(self.bearing, sample.heading_deg),
                accuracy: status::accuracy_line(
                    &self.target_name,
                    Some(self.distance_km),
                    sample.accuracy_label.as_deref(),
                ),
            },
        }
    }
}
