//! The splash subsystem: owns all tracking state and exposes the entry points
//! the engine calls.
//!
//! ## Entry points
//! - [`WaterSplash::on_projectile_step`] / [`WaterSplash::on_projectile_collision`]
//!   for arrows in flight
//! - [`WaterSplash::on_item_dropped`] / [`WaterSplash::on_item_thrown`]
//! - [`WaterSplash::on_frame_tick`] once per frame
//! - [`WaterSplash::on_entity_destroyed`] and [`WaterSplash::reset`] to keep
//!   identities from going stale
//!
//! All state is volatile and thrown away on every level load.

use bevy_ecs::resource::Resource;

use crate::config::WaterPhysicsConfig;
use crate::constants::PROJECTILE_COLLISION_WINDOW;
use crate::effects::{play_splash, EffectSizeTier};
use crate::host::{EntityId, SplashHost};
use crate::tracking::{DroppedItemMonitor, EntityWaterTracker, SplashDeduplicator, WeaponSplashThrottle};
use crate::water::water_level_at;

/// Running totals since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashStats {
    pub arrow_splashes: u64,
    pub item_splashes: u64,
    pub weapon_splashes: u64,
    /// Dropped items whose tracking window ran out.
    pub expired_items: u64,
    /// Dropped items whose entity disappeared while tracked.
    pub stale_items: u64,
}

#[derive(Resource, Debug, Default)]
pub struct WaterSplash {
    config: WaterPhysicsConfig,
    tracker: EntityWaterTracker,
    splashed: SplashDeduplicator,
    dropped_items: DroppedItemMonitor,
    weapon: WeaponSplashThrottle,
    pub stats: SplashStats,
}

impl WaterSplash {
    pub fn new(config: WaterPhysicsConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &WaterPhysicsConfig {
        &self.config
    }

    /// Replaces the gating flags. Tracked state is kept.
    pub fn apply_config(&mut self, config: WaterPhysicsConfig) {
        if config != self.config {
            log::info!("Water physics settings changed: {:?}", config);
        }
        self.config = config;
    }

    pub fn tracker(&self) -> &EntityWaterTracker {
        &self.tracker
    }

    pub fn splashed(&self) -> &SplashDeduplicator {
        &self.splashed
    }

    pub fn dropped_items(&self) -> &DroppedItemMonitor {
        &self.dropped_items
    }

    /// A projectile moved. Splashes if it just crossed into the water.
    pub fn on_projectile_step(&mut self, host: &mut impl SplashHost, projectile: EntityId) {
        if !self.config.arrow_effects || !host.is_simulation_ready() {
            return;
        }
        if !self.tracker.check_entry(&*host, projectile) {
            return;
        }
        if self.splashed.contains(projectile) {
            return;
        }

        let Some(position) = host.entity_position(projectile) else {
            return;
        };
        if let Some(water_level) = water_level_at(&*host, position) {
            play_splash(host, position.with_y(water_level), EffectSizeTier::Tiny);
            self.splashed.add(projectile);
            self.stats.arrow_splashes += 1;
        }
    }

    /// A projectile reported a collision. Catches slow arrows that hit the
    /// surface without a step ever seeing them cross it.
    pub fn on_projectile_collision(&mut self, host: &mut impl SplashHost, projectile: EntityId) {
        if !self.config.arrow_effects || !host.is_simulation_ready() {
            return;
        }
        let Some(position) = host.entity_position(projectile) else {
            return;
        };
        let Some(water_level) = water_level_at(&*host, position) else {
            return;
        };

        let (below, above) = PROJECTILE_COLLISION_WINDOW;
        let dist = position.y - water_level;
        if dist < above && dist > below && !self.splashed.contains(projectile) {
            play_splash(host, position.with_y(water_level), EffectSizeTier::Tiny);
            self.splashed.add(projectile);
            self.stats.arrow_splashes += 1;
        }
    }

    pub fn on_item_dropped(&mut self, host: &impl SplashHost, item: EntityId) {
        if !self.config.item_effects || !host.is_simulation_ready() {
            return;
        }
        self.dropped_items.track(host, item);
    }

    /// Thrown items are polled exactly like dropped ones; the force does not
    /// change the splash.
    pub fn on_item_thrown(&mut self, host: &impl SplashHost, item: EntityId, _force: f32) {
        self.on_item_dropped(host, item);
    }

    /// Forgets everything about `entity`. A later object reusing the same
    /// identity starts out unobserved.
    pub fn on_entity_destroyed(&mut self, entity: EntityId) {
        self.tracker.remove(entity);
        self.splashed.remove(entity);
        self.dropped_items.remove(entity);
    }

    /// Per-frame work: weapon swings first, then dropped item polling.
    pub fn on_frame_tick(&mut self, host: &mut impl SplashHost) {
        if !host.is_simulation_ready() {
            return;
        }

        if self.config.weapon_effects && self.weapon.check(host) {
            self.stats.weapon_splashes += 1;
        }

        let pass = self.dropped_items.update(host, &mut self.splashed);
        self.stats.item_splashes += pass.splashed as u64;
        self.stats.expired_items += pass.expired as u64;
        self.stats.stale_items += pass.stale as u64;
    }

    /// Level load: nothing tracked so far refers to the new world.
    pub fn reset(&mut self) {
        log::info!(
            "Resetting water splash state ({} tracked, {} splashed, {} dropped items)",
            self.tracker.len(),
            self.splashed.len(),
            self.dropped_items.len()
        );
        self.tracker.clear();
        self.splashed.clear();
        self.dropped_items.clear();
        self.weapon.reset();
        self.stats = SplashStats::default();
    }

    /// Engine shutdown.
    pub fn shutdown(&mut self) {
        self.tracker.clear();
        self.splashed.clear();
    }

    pub fn summary(&self) -> String {
        format!(
            "Water splashes: {} arrow, {} item, {} weapon ({} items expired, {} stale)",
            self.stats.arrow_splashes,
            self.stats.item_splashes,
            self.stats.weapon_splashes,
            self.stats.expired_items,
            self.stats.stale_items
        )
    }
}
