mod controller;

pub use controller::{Phase, SessionController};
