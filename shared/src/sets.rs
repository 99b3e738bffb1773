use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SplashUpdateSet {
    /// Engine-side work that moves entities and emits notifications.
    HostSimulation,
    /// Notification processing and the splash frame tick.
    Splash,
}
