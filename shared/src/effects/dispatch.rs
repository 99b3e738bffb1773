//! Fire-and-forget playback of splash visuals and sound.

use bevy::math::Vec3;

use super::EffectSizeTier;
use crate::constants::{
    EFFECT_HEIGHT_OFFSET, SPLASH_SOUND_NAME, SPLASH_SOUND_RADIUS, SPLASH_SOUND_VOLUME,
    WEAPON_SPLASH_EFFECT_NAME,
};
use crate::host::{SoundParams, SplashHost};

/// Plays the sized splash and ring visuals plus the splash sound just above
/// `position`.
///
/// The sound is emitted from a transient world object that only lives for the
/// duration of the playback request. Playback failures are not observed.
pub fn play_splash(host: &mut impl SplashHost, position: Vec3, tier: EffectSizeTier) {
    let effect_pos = position + Vec3::new(0.0, EFFECT_HEIGHT_OFFSET, 0.0);

    host.play_visual_effect(tier.splash_effect_name(), effect_pos);
    host.play_visual_effect(tier.ring_effect_name(), effect_pos);

    if let Some(emitter) = host.insert_transient(effect_pos) {
        host.play_spatial_sound(
            SPLASH_SOUND_NAME,
            emitter,
            SoundParams {
                volume: SPLASH_SOUND_VOLUME,
                radius: SPLASH_SOUND_RADIUS,
            },
        );
        host.remove_transient(emitter);
    }

    log::debug!("Water splash {:?} at {:?}", tier, effect_pos);
}

/// Unsized visual used for weapon swings through the surface. `surface_pos`
/// already carries the surface height; the offset is added here.
pub fn play_weapon_splash(host: &mut impl SplashHost, surface_pos: Vec3) {
    let effect_pos = surface_pos + Vec3::new(0.0, EFFECT_HEIGHT_OFFSET, 0.0);
    host.play_visual_effect(WEAPON_SPLASH_EFFECT_NAME, effect_pos);
    log::debug!("Weapon splash at {:?}", effect_pos);
}
