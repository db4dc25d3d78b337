//! User-facing status lines.

use crate::domain::{Bearing, SessionError};
use crate::extensions::DegreesExt;

const NO_ACCURACY: &str = "--";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLines {
    pub heading: String,
    pub accuracy: String,
}

/// Describes the turn needed to face the target, e.g. `"12° right"`.
pub fn turn_text(turn: f64) -> String {
    let turn_abs = turn.abs();
    if turn_abs < 0.5 {
        "0°".to_string()
    } else if turn > 0.0 {
        format!("{:.0}° right", turn_abs)
    } else {
        format!("{:.0}° left", turn_abs)
    }
}

pub fn heading_line(bearing: Bearing, heading_deg: f64) -> String {
    let turn = bearing.degrees().shortest_diff_from(heading_deg);
    format!("Qibla: {} | Heading: {:.0}° | Turn: {}", bearing, heading_deg, turn_text(turn))
}

pub fn accuracy_line(target_name: &str, distance_km: Option<f64>, accuracy_label: Option<&str>) -> String {
    let accuracy = accuracy_label.unwrap_or(NO_ACCURACY);
    match distance_km {
        Some(distance_km) => format!("Distance to {}: {:.0} km | Accuracy: {}", target_name, distance_km, accuracy),
        None => format!("Accuracy: {}", accuracy),
    }
}

pub fn activating() -> StatusLines {
    StatusLines {
        heading: "Getting location…".to_string(),
        accuracy: "Waiting for permissions…".to_string(),
    }
}

pub fn established(target_name: &str, bearing: Bearing, distance_km: f64) -> StatusLines {
    StatusLines {
        heading: format!("Location OK. Qibla bearing: {}. Move phone in a figure-8 to calibrate.", bearing),
        accuracy: accuracy_line(target_name, Some(distance_km), None),
    }
}

pub fn failed(error: &SessionError) -> StatusLines {
    StatusLines {
        heading: error.remediation().to_string(),
        accuracy: NO_ACCURACY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PermissionKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0°")]
    #[case(0.49, "0°")]
    #[case(-0.49, "0°")]
    #[case(12.2, "12° right")]
    #[case(-12.2, "12° left")]
    #[case(180.0, "180° right")]
    #[case(0.6, "1° right")]
    fn describes_the_turn(#[case] turn: f64, #[case] expected: &str) {
        assert_eq!(turn_text(turn), expected);
    }

    #[test]
    fn heading_line_includes_bearing_heading_and_turn() {
        assert_eq!(
            heading_line(Bearing::new(58.48), 46.0),
            "Qibla: 58° | Heading: 46° | Turn: 12° right"
        );
        assert_eq!(
            heading_line(Bearing::new(10.0), 350.0),
            "Qibla: 10° | Heading: 350° | Turn: 20° right"
        );
        assert_eq!(heading_line(Bearing::new(350.0), 20.0), "Qibla: 350° | Heading: 20° | Turn: 30° left");
    }

    #[rstest]
    #[case(Some(10_306.3), Some("5°"), "Distance to Kaaba: 10306 km | Accuracy: 5°")]
    #[case(Some(10_306.3), None, "Distance to Kaaba: 10306 km | Accuracy: --")]
    #[case(None, Some("relative"), "Accuracy: relative")]
    #[case(None, None, "Accuracy: --")]
    fn formats_the_accuracy_line(#[case] distance: Option<f64>, #[case] label: Option<&str>, #[case] expected: &str) {
        assert_eq!(accuracy_line("Kaaba", distance, label), expected);
    }

    #[test]
    fn established_announces_the_bearing() {
        let lines = established("Kaaba", Bearing::new(58.48), 10_306.3);

        assert_eq!(lines.heading, "Location OK. Qibla bearing: 58°. Move phone in a figure-8 to calibrate.");
        assert_eq!(lines.accuracy, "Distance to Kaaba: 10306 km | Accuracy: --");
    }

    #[test]
    fn failed_shows_a_remediation_per_error() {
        let motion = failed(&SessionError::PermissionDenied(PermissionKind::Motion));
        let location = failed(&SessionError::PermissionDenied(PermissionKind::Location));
        let unavailable = failed(&SessionError::LocationUnavailable("timeout".to_string()));

        assert!(motion.heading.starts_with("Permission denied."));
        assert!(location.heading.starts_with("Location denied."));
        assert!(unavailable.heading.starts_with("Could not start."));
        assert_eq!(unavailable.accuracy, "--");
    }
}
