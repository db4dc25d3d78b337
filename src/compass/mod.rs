mod controller;

pub use controller::{Phase, Platform, SessionController};
