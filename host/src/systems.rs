use bevy::math::Vec3;
use bevy::prelude::*;
use splash_shared::{EntityDestroyed, ItemDropped, ItemThrown, ProjectileCollided, ProjectileStepped};

use crate::scenario::{Scenario, ScenarioAction};
use crate::scene::{ArrowEvent, BodyKind, DemoScene};

/// Arrow half extents, shaft along x.
const ARROW_HALF_SIZE: Vec3 = Vec3::new(40.0, 1.0, 1.0);

/// Fixed simulation step and the frame budget of the run.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameClock {
    pub frame_ms: f32,
    pub elapsed_frames: u32,
    /// `None` runs until killed.
    pub max_frames: Option<u32>,
}

impl FrameClock {
    pub fn new(fps: f64, max_frames: Option<u32>) -> Self {
        Self {
            frame_ms: (1000.0 / fps) as f32,
            elapsed_frames: 0,
            max_frames,
        }
    }
}

pub fn step_scene(
    clock: Res<FrameClock>,
    mut scene: ResMut<DemoScene>,
    mut steps: EventWriter<ProjectileStepped>,
    mut collisions: EventWriter<ProjectileCollided>,
    mut destroyed: EventWriter<EntityDestroyed>,
) {
    for event in scene.step(clock.frame_ms) {
        match event {
            ArrowEvent::Stepped(entity) => {
                steps.write(ProjectileStepped { entity });
            }
            ArrowEvent::HitGround(entity) => {
                collisions.write(ProjectileCollided { entity });
            }
            ArrowEvent::Removed(entity) => {
                destroyed.write(EntityDestroyed { entity });
            }
        }
    }
}

pub fn run_scenario(
    mut scenario: ResMut<Scenario>,
    mut scene: ResMut<DemoScene>,
    mut dropped: EventWriter<ItemDropped>,
    mut thrown: EventWriter<ItemThrown>,
) {
    let now = scene.time_ms;
    for action in scenario.due(now) {
        match action {
            ScenarioAction::FireArrow { position, velocity } => {
                let entity = scene.spawn(BodyKind::Arrow, position, velocity, ARROW_HALF_SIZE);
                debug!("{:.0} ms: arrow {:?} fired from {}", now, entity, position);
            }
            ScenarioAction::DropItem {
                position,
                half_size,
            } => {
                let entity = scene.spawn(BodyKind::Item, position, Vec3::ZERO, half_size);
                debug!("{:.0} ms: item {:?} dropped at {}", now, entity, position);
                dropped.write(ItemDropped { entity });
            }
            ScenarioAction::ThrowItem {
                position,
                velocity,
                half_size,
                force,
            } => {
                let entity = scene.spawn(BodyKind::Item, position, velocity, half_size);
                debug!("{:.0} ms: item {:?} thrown from {}", now, entity, position);
                thrown.write(ItemThrown { entity, force });
            }
            ScenarioAction::Animate(names) => {
                debug!("{:.0} ms: player animations {:?}", now, names);
                scene.player_animations = names;
            }
        }
    }
}

pub fn count_frames(mut clock: ResMut<FrameClock>, mut exit: EventWriter<AppExit>) {
    clock.elapsed_frames += 1;
    if clock
        .max_frames
        .is_some_and(|max| clock.elapsed_frames >= max)
    {
        info!("Stopping after {} frames", clock.elapsed_frames);
        exit.write(AppExit::Success);
    }
}
