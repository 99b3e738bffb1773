use std::time::Duration;

use bevy::math::Vec3;
use bevy::prelude::*;
use bevy_app::ScheduleRunnerPlugin;
use splash_shared::{SplashUpdateSet, WaterPhysicsConfig, WaterSplashPlugin};

use crate::scenario::Scenario;
use crate::scene::{BodyKind, DemoScene};
use crate::systems::{count_frames, run_scenario, step_scene, FrameClock};

/// Where the player stands: waist deep in the lake, close to the shore.
pub const PLAYER_POSITION: Vec3 = Vec3::new(150.0, -60.0, 0.0);

#[derive(Debug, Clone, Copy)]
pub struct HostOptions {
    pub fps: f64,
    pub max_frames: Option<u32>,
    pub seed: u64,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            fps: 60.0,
            max_frames: Some(400),
            seed: 0,
        }
    }
}

pub fn build_scene() -> DemoScene {
    let mut scene = DemoScene::lake_shore();
    let player = scene.spawn(
        BodyKind::Player,
        PLAYER_POSITION,
        Vec3::ZERO,
        Vec3::new(40.0, 90.0, 40.0),
    );
    scene.player = Some(player);
    scene
}

/// Everything except logging, so tests can drive the app with `update()`.
pub fn setup_app(app: &mut App, config: WaterPhysicsConfig, options: &HostOptions) {
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / options.fps,
        ))),
    );

    app.insert_resource(build_scene())
        .insert_resource(Scenario::lake_shore(options.seed))
        .insert_resource(FrameClock::new(options.fps, options.max_frames))
        .add_plugins(WaterSplashPlugin::<DemoScene>::new(config))
        .add_systems(
            Update,
            (step_scene, run_scenario, count_frames)
                .chain()
                .in_set(SplashUpdateSet::HostSimulation),
        );
}

pub fn init(config: WaterPhysicsConfig, options: HostOptions) {
    let mut app = App::new();
    app.add_plugins(bevy::log::LogPlugin::default());

    info!(
        "Starting splash host at {} fps (seed {}, {:?})",
        options.fps, options.seed, config
    );

    setup_app(&mut app, config, &options);

    app.run();
}
