//! Splash effect sizing and playback.

pub mod dispatch;
pub mod size;

pub use dispatch::*;
pub use size::*;
