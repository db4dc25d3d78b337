mod session;
pub mod status;
mod workflow;

pub use session::{Session, SessionUpdate};
pub use status::StatusLines;
pub use workflow::{FixRequest, SessionSettings, establish_session};
