use crate::domain::{RawFrame, SessionError};
use crate::session::Session;

#[derive(Debug)]
pub enum CompassEvent {
    Activate,
    Deactivate,
    Orientation(RawFrame),
    SessionEstablished { generation: u64, session: Box<Session> },
    ActivationFailed { generation: u64, error: SessionError },
}
