//! Bevy integration: engine notifications arrive as events and are fed to the
//! [`WaterSplash`] resource once per frame.

use std::marker::PhantomData;

use bevy::prelude::*;

use crate::config::WaterPhysicsConfig;
use crate::host::{EntityId, SplashHost};
use crate::sets::SplashUpdateSet;
use crate::splash::WaterSplash;

/// A tracked projectile advanced one simulation step.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileStepped {
    pub entity: EntityId,
}

/// A projectile reported a collision. Only the projectile's position at the
/// time of the report matters, not what it hit.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileCollided {
    pub entity: EntityId,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemDropped {
    pub entity: EntityId,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemThrown {
    pub entity: EntityId,
    pub force: f32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct EntityDestroyed {
    pub entity: EntityId,
}

/// A new game, save game or level change started loading.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LevelLoadBegan;

#[derive(Event, Debug, Clone, Copy)]
pub struct SettingsApplied(pub WaterPhysicsConfig);

/// Adds water splashes to an app whose engine services are provided by the
/// resource `H`.
///
/// The host resource must be inserted by the app; the plugin only registers
/// [`WaterSplash`], the notification events and the processing systems.
pub struct WaterSplashPlugin<H> {
    pub config: WaterPhysicsConfig,
    _host: PhantomData<fn() -> H>,
}

impl<H> WaterSplashPlugin<H> {
    pub fn new(config: WaterPhysicsConfig) -> Self {
        Self {
            config,
            _host: PhantomData,
        }
    }
}

impl<H> Default for WaterSplashPlugin<H> {
    fn default() -> Self {
        Self::new(WaterPhysicsConfig::default())
    }
}

impl<H: SplashHost + Resource> Plugin for WaterSplashPlugin<H> {
    fn build(&self, app: &mut App) {
        app.insert_resource(WaterSplash::new(self.config))
            .add_event::<ProjectileStepped>()
            .add_event::<ProjectileCollided>()
            .add_event::<ItemDropped>()
            .add_event::<ItemThrown>()
            .add_event::<EntityDestroyed>()
            .add_event::<LevelLoadBegan>()
            .add_event::<SettingsApplied>()
            .configure_sets(
                Update,
                (SplashUpdateSet::HostSimulation, SplashUpdateSet::Splash).chain(),
            )
            .add_systems(
                Update,
                process_splash_events::<H>.in_set(SplashUpdateSet::Splash),
            )
            .add_systems(Last, shutdown_on_exit);

        log::info!("Water splash plugin initialized: {:?}", self.config);
    }
}

/// Drains this frame's notifications in engine order, then runs the frame
/// tick.
#[allow(clippy::too_many_arguments)]
fn process_splash_events<H: SplashHost + Resource>(
    mut splash: ResMut<WaterSplash>,
    mut host: ResMut<H>,
    mut level_loads: EventReader<LevelLoadBegan>,
    mut settings: EventReader<SettingsApplied>,
    mut dropped: EventReader<ItemDropped>,
    mut thrown: EventReader<ItemThrown>,
    mut steps: EventReader<ProjectileStepped>,
    mut collisions: EventReader<ProjectileCollided>,
    mut destroyed: EventReader<EntityDestroyed>,
) {
    let host = &mut *host;

    if level_loads.read().count() > 0 {
        splash.reset();
    }
    if let Some(SettingsApplied(config)) = settings.read().last() {
        splash.apply_config(*config);
    }

    for event in dropped.read() {
        splash.on_item_dropped(&*host, event.entity);
    }
    for event in thrown.read() {
        splash.on_item_thrown(&*host, event.entity, event.force);
    }
    for event in steps.read() {
        splash.on_projectile_step(host, event.entity);
    }
    for event in collisions.read() {
        splash.on_projectile_collision(host, event.entity);
    }
    for event in destroyed.read() {
        splash.on_entity_destroyed(event.entity);
    }

    splash.on_frame_tick(host);
}

fn shutdown_on_exit(mut exits: EventReader<AppExit>, mut splash: ResMut<WaterSplash>) {
    if exits.read().count() > 0 {
        log::info!("{}", splash.summary());
        splash.shutdown();
    }
}
