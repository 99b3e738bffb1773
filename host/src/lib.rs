//! Headless host for the water splash core: a scripted lake shore scene that
//! implements [`splash_shared::SplashHost`] and feeds the splash plugin.

pub mod init;
pub mod scenario;
pub mod scene;
pub mod systems;
