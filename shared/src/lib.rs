//! Water splash detection for projectiles, dropped items and melee swings.
//!
//! The engine notifies [`WaterSplash`] about projectile steps and collisions,
//! dropped and thrown items and destroyed entities, and ticks it once per
//! frame. Splash visuals and sounds are played back through the engine's
//! [`SplashHost`] implementation, scaled to the size of whatever hit the water.

pub mod config;
pub mod constants;
pub mod effects;
pub mod host;
pub mod plugin;
pub mod sets;
pub mod splash;
pub mod tracking;
pub mod water;

#[cfg(test)]
mod testing;

pub use config::{load_config, save_config, WaterPhysicsConfig};
pub use constants::*;
pub use host::*;
pub use plugin::*;
pub use sets::SplashUpdateSet;
pub use splash::{SplashStats, WaterSplash};
