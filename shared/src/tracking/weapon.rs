//! Splashes from the player's melee swings, rate limited by a cooldown.

use bevy::math::Vec3;

use crate::constants::{
    MELEE_ACTION_TOKENS, MELEE_STYLE_TOKENS, WEAPON_FALLBACK_HEIGHT, WEAPON_HAND_NODE,
    WEAPON_SPLASH_COOLDOWN_MS, WEAPON_WATER_WINDOW,
};
use crate::effects::play_weapon_splash;
use crate::host::{EntityId, SplashHost};
use crate::water::water_level_at;

/// True for melee attack animation names, e.g. `T_1HATTACKL` or
/// `S_2HATTACK`. Matching is case-sensitive.
pub fn is_melee_swing_animation(name: &str) -> bool {
    MELEE_STYLE_TOKENS.iter().any(|token| name.contains(token))
        && MELEE_ACTION_TOKENS.iter().any(|token| name.contains(token))
}

pub fn is_swinging(host: &impl SplashHost, entity: EntityId) -> bool {
    host.active_animation_names(entity)
        .iter()
        .any(|name| is_melee_swing_animation(name))
}

/// Where the blade is assumed to be: the right hand, or chest height when the
/// model has no such node.
pub fn weapon_reference_position(host: &impl SplashHost, entity: EntityId) -> Option<Vec3> {
    host.node_position_world(entity, WEAPON_HAND_NODE).or_else(|| {
        host.entity_position(entity)
            .map(|pos| pos + Vec3::new(0.0, WEAPON_FALLBACK_HEIGHT, 0.0))
    })
}

#[derive(Debug, Default)]
pub struct WeaponSplashThrottle {
    last_splash_ms: Option<f32>,
}

impl WeaponSplashThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_splash_ms(&self) -> Option<f32> {
        self.last_splash_ms
    }

    /// Strictly more than the cooldown must have passed; exactly 300 ms is
    /// still cooling down.
    fn cooled_down(&self, now: f32) -> bool {
        self.last_splash_ms
            .map_or(true, |last| now - last > WEAPON_SPLASH_COOLDOWN_MS)
    }

    /// Checks the player's swing against the water under the weapon and plays
    /// a splash if it cuts the surface. Returns true if a splash was played.
    pub fn check(&mut self, host: &mut impl SplashHost) -> bool {
        if !host.is_simulation_ready() {
            return false;
        }
        let Some(player) = host.player_entity() else {
            return false;
        };
        if !is_swinging(&*host, player) {
            return false;
        }

        let now = host.time_ms();
        if !self.cooled_down(now) {
            return false;
        }

        let Some(weapon_pos) = weapon_reference_position(&*host, player) else {
            return false;
        };
        let Some(water_level) = water_level_at(&*host, weapon_pos) else {
            return false;
        };

        let (below, above) = WEAPON_WATER_WINDOW;
        let dist_to_water = weapon_pos.y - water_level;
        if dist_to_water >= above || dist_to_water <= below {
            return false;
        }

        play_weapon_splash(host, weapon_pos.with_y(water_level));
        self.last_splash_ms = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_splash_ms = None;
    }
}
