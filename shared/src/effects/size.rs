//! Splash size tiers derived from an object's bounding box.

use bevy::math::bounding::Aabb3d;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ELONGATED_MAX_VOLUME, ELONGATED_MIN_EXTENT, ELONGATED_VOLUME_FACTOR, SIZE_THRESHOLD_MEDIUM,
    SIZE_THRESHOLD_SMALL, SIZE_THRESHOLD_TINY,
};

/// Scales the splash and ring visuals to the object that hit the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EffectSizeTier {
    Tiny,
    #[default]
    Small,
    Medium,
    Large,
}

impl EffectSizeTier {
    pub fn splash_effect_name(self) -> &'static str {
        match self {
            EffectSizeTier::Tiny => "spellFX_WaterSplash_Tiny",
            EffectSizeTier::Small => "spellFX_WaterSplash_Small",
            EffectSizeTier::Medium => "spellFX_WaterSplash_Medium",
            EffectSizeTier::Large => "spellFX_WaterSplash_Large",
        }
    }

    pub fn ring_effect_name(self) -> &'static str {
        match self {
            EffectSizeTier::Tiny => "spellFX_WaterRing_Tiny",
            EffectSizeTier::Small => "spellFX_WaterRing_Small",
            EffectSizeTier::Medium => "spellFX_WaterRing_Medium",
            EffectSizeTier::Large => "spellFX_WaterRing_Large",
        }
    }

    /// Classifies an effective size (volume after the elongation correction).
    pub fn from_effective_size(effective_size: f32) -> Self {
        if effective_size < SIZE_THRESHOLD_TINY {
            EffectSizeTier::Tiny
        } else if effective_size < SIZE_THRESHOLD_SMALL {
            EffectSizeTier::Small
        } else if effective_size < SIZE_THRESHOLD_MEDIUM {
            EffectSizeTier::Medium
        } else {
            EffectSizeTier::Large
        }
    }
}

/// Volume of the box, halved for long thin shapes such as spears and
/// arrows so they do not land in a bigger tier than they look.
pub fn effective_size(bounds: &Aabb3d) -> f32 {
    let extents = (bounds.max - bounds.min).abs();
    let volume = extents.x * extents.y * extents.z;
    let max_extent = extents.max_element();

    if max_extent > ELONGATED_MIN_EXTENT && volume < ELONGATED_MAX_VOLUME {
        volume * ELONGATED_VOLUME_FACTOR
    } else {
        volume
    }
}

pub fn classify_bounds(bounds: &Aabb3d) -> EffectSizeTier {
    EffectSizeTier::from_effective_size(effective_size(bounds))
}
