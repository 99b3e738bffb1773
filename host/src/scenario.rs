//! Timed script of things happening on the lake shore.

use bevy::math::Vec3;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Horizontal jitter applied to every scripted spawn position.
pub const SPAWN_JITTER: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioAction {
    FireArrow {
        position: Vec3,
        velocity: Vec3,
    },
    DropItem {
        position: Vec3,
        half_size: Vec3,
    },
    ThrowItem {
        position: Vec3,
        velocity: Vec3,
        half_size: Vec3,
        force: f32,
    },
    /// Replaces the player's active animations.
    Animate(Vec<String>),
}

/// Actions sorted by the time (ms) at which they fire.
#[derive(Resource, Debug, Default)]
pub struct Scenario {
    actions: Vec<(f32, ScenarioAction)>,
    next: usize,
}

impl Scenario {
    pub fn new(mut actions: Vec<(f32, ScenarioAction)>) -> Self {
        actions.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { actions, next: 0 }
    }

    /// The default demo, matching [`crate::scene::DemoScene::lake_shore`]:
    ///
    /// - an arrow arcing from the shore into the lake
    /// - an arrow dropping into the ford, then lying on its bed
    /// - an arrow fired under water in the ford, only caught by its collision
    /// - a small item dropped on dry ground
    /// - a large item thrown from the shore into the lake
    /// - a long item dropped straight into the lake
    /// - a melee swing of the player, who stands waist deep in the lake
    pub fn lake_shore(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut jitter = |x: f32, y: f32, z: f32| {
            Vec3::new(
                x + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER),
                y,
                z + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER),
            )
        };

        Self::new(vec![
            (
                100.0,
                ScenarioAction::FireArrow {
                    position: jitter(-400.0, 150.0, 0.0),
                    velocity: Vec3::new(2000.0, 200.0, 0.0),
                },
            ),
            (
                200.0,
                ScenarioAction::DropItem {
                    position: jitter(-200.0, 60.0, 0.0),
                    half_size: Vec3::splat(5.0),
                },
            ),
            (
                300.0,
                ScenarioAction::FireArrow {
                    position: jitter(-2600.0, 120.0, 100.0),
                    velocity: Vec3::new(0.0, -50.0, 0.0),
                },
            ),
            (
                400.0,
                ScenarioAction::ThrowItem {
                    position: jitter(-100.0, 100.0, 0.0),
                    velocity: Vec3::new(400.0, 200.0, 0.0),
                    half_size: Vec3::splat(10.0),
                    force: 1.0,
                },
            ),
            (
                500.0,
                ScenarioAction::FireArrow {
                    position: jitter(-2500.0, -10.0, -100.0),
                    velocity: Vec3::new(300.0, -60.0, 0.0),
                },
            ),
            (
                600.0,
                ScenarioAction::DropItem {
                    position: jitter(800.0, 150.0, -200.0),
                    half_size: Vec3::new(4.0, 4.0, 40.0),
                },
            ),
            (
                1000.0,
                ScenarioAction::Animate(vec!["S_1HRUN".to_string(), "T_1HATTACKL".to_string()]),
            ),
            (1450.0, ScenarioAction::Animate(Vec::new())),
        ])
    }

    /// Removes and returns every action due at `now_ms`.
    pub fn due(&mut self, now_ms: f32) -> Vec<ScenarioAction> {
        let start = self.next;
        while self.next < self.actions.len() && self.actions[self.next].0 <= now_ms {
            self.next += 1;
        }
        self.actions[start..self.next]
            .iter()
            .map(|(_, action)| action.clone())
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.actions.len()
    }
}
