//! Tuned gameplay constants for water splash detection.
//!
//! Distances are in world units, times in simulation milliseconds.

/// Height above the query position at which the downward water probe starts.
pub const WATER_PROBE_START_HEIGHT: f32 = 500.0;
/// Length of the downward water probe.
pub const WATER_PROBE_LENGTH: f32 = 1000.0;
/// Upper-cased material name fragments treated as water when the material
/// carries no water group tag.
pub const WATER_MATERIAL_NAME_TOKENS: [&str; 2] = ["WATER", "WASSER"];

/// Vertical offset applied to every splash effect position.
pub const EFFECT_HEIGHT_OFFSET: f32 = 5.0;
pub const SPLASH_SOUND_NAME: &str = "WATERPHYSICS_SPLASH";
pub const SPLASH_SOUND_VOLUME: f32 = 1.0;
pub const SPLASH_SOUND_RADIUS: f32 = 2000.0;
/// Visual played by weapon swings. It has no size tier and no sound.
pub const WEAPON_SPLASH_EFFECT_NAME: &str = "spellFX_WaterSplash";

pub const SIZE_THRESHOLD_TINY: f32 = 500.0;
pub const SIZE_THRESHOLD_SMALL: f32 = 2000.0;
pub const SIZE_THRESHOLD_MEDIUM: f32 = 8000.0;
/// Shapes longer than this along any axis with a volume below
/// [`ELONGATED_MAX_VOLUME`] are classified on half their volume.
pub const ELONGATED_MIN_EXTENT: f32 = 100.0;
pub const ELONGATED_MAX_VOLUME: f32 = 1000.0;
pub const ELONGATED_VOLUME_FACTOR: f32 = 0.5;

/// How long a dropped or thrown item is polled for water contact.
pub const DROPPED_ITEM_TRACK_TIME_MS: f32 = 5000.0;
/// An item counts as in the water once it is this close above the surface.
pub const DROPPED_ITEM_WATER_TOLERANCE: f32 = 10.0;

pub const WEAPON_SPLASH_COOLDOWN_MS: f32 = 300.0;
/// Skeleton node used as the weapon position during a swing.
pub const WEAPON_HAND_NODE: &str = "ZS_RIGHTHAND";
/// Reference height above the player origin when the hand node is missing.
pub const WEAPON_FALLBACK_HEIGHT: f32 = 100.0;
/// Open window `(below, above)` of weapon height relative to the surface.
pub const WEAPON_WATER_WINDOW: (f32, f32) = (-200.0, 100.0);
pub const MELEE_STYLE_TOKENS: [&str; 4] = ["S_1H", "S_2H", "T_1H", "T_2H"];
pub const MELEE_ACTION_TOKENS: [&str; 2] = ["ATTACK", "COMBO"];

/// Open window `(below, above)` of projectile height relative to the surface
/// in which a collision report produces a splash.
pub const PROJECTILE_COLLISION_WINDOW: (f32, f32) = (-100.0, 50.0);
