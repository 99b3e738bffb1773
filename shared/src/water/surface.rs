//! Downward probe for the water surface under a point.

use bevy::math::Vec3;

use crate::constants::{WATER_MATERIAL_NAME_TOKENS, WATER_PROBE_LENGTH, WATER_PROBE_START_HEIGHT};
use crate::host::{HitMaterial, MaterialGroup, SplashHost};

/// Returns the height of the water surface below `position`, or `None` when
/// the first static polygon under it is not water.
///
/// The probe starts [`WATER_PROBE_START_HEIGHT`] above the position so that a
/// point slightly under the surface still finds it.
pub fn water_level_at(host: &impl SplashHost, position: Vec3) -> Option<f32> {
    let origin = position + Vec3::new(0.0, WATER_PROBE_START_HEIGHT, 0.0);
    let ray = Vec3::new(0.0, -WATER_PROBE_LENGTH, 0.0);

    let hit = host.trace_ray_static(origin, ray)?;
    let material = hit.material.as_ref()?;
    is_water_material(material).then_some(hit.point.y)
}

/// Water is either tagged as such or named like it. Not every water texture
/// in shipped worlds carries the tag.
pub fn is_water_material(material: &HitMaterial) -> bool {
    if material.group == MaterialGroup::Water {
        return true;
    }

    let name = material.name.to_uppercase();
    WATER_MATERIAL_NAME_TOKENS
        .iter()
        .any(|token| name.contains(token))
}
