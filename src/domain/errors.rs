use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionKind {
    Motion,
    Location,
}

impl Display for PermissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionKind::Motion => write!(f, "motion/orientation"),
            PermissionKind::Location => write!(f, "location"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum SessionError {
    #[error("{0} permission denied")]
    PermissionDenied(PermissionKind),
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
}

impl SessionError {
    /// A message telling the user how to get past this error.
    pub fn remediation(&self) -> &'static str {
        match self {
            SessionError::PermissionDenied(PermissionKind::Motion) => {
                "Permission denied. Please allow Motion/Orientation and Location access."
            }
            SessionError::PermissionDenied(PermissionKind::Location) => {
                "Location denied. Please allow Location access in settings."
            }
            SessionError::LocationUnavailable(_) => {
                "Could not start. Ensure Location and Motion/Orientation are available and allowed."
            }
        }
    }
}
