//! The boundary between the splash core and the engine that runs it.
//!
//! Everything the core needs from the running game (ray casts, entity
//! transforms, animation state, effect playback) goes through [`SplashHost`].

use bevy::math::{bounding::Aabb3d, Vec3};
use bevy_ecs::entity::Entity;
use serde::{Deserialize, Serialize};

/// Stable identity of a simulated object (projectile, item, player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl From<Entity> for EntityId {
    fn from(entity: Entity) -> Self {
        Self(entity.to_bits())
    }
}

/// Handle to a transient world object used as a sound emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterHandle(pub u64);

/// Material groups a polygon can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialGroup {
    #[default]
    Undefined,
    Metal,
    Stone,
    Wood,
    Earth,
    Water,
    Snow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitMaterial {
    pub group: MaterialGroup,
    pub name: String,
}

impl HitMaterial {
    pub fn new(group: MaterialGroup, name: impl Into<String>) -> Self {
        Self {
            group,
            name: name.into(),
        }
    }
}

/// First polygon hit by a static-geometry ray.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    /// `None` when the polygon has no material assigned.
    pub material: Option<HitMaterial>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundParams {
    pub volume: f32,
    pub radius: f32,
}

/// Services the engine provides to the splash core.
///
/// Queries take `&self`; anything that changes the world or plays an effect
/// takes `&mut self`. All calls are synchronous and made from the frame thread.
pub trait SplashHost {
    /// False while the game is starting up, loading or changing level.
    fn is_simulation_ready(&self) -> bool;

    /// Total simulation time in milliseconds.
    fn time_ms(&self) -> f32;

    /// Casts `ray` (direction scaled by length) from `origin` against static
    /// polygons only and reports the first hit.
    fn trace_ray_static(&self, origin: Vec3, ray: Vec3) -> Option<RayHit>;

    /// World position of the entity, or `None` if the identity no longer
    /// refers to a live object.
    fn entity_position(&self, entity: EntityId) -> Option<Vec3>;

    fn entity_local_bounds(&self, entity: EntityId) -> Option<Aabb3d>;

    /// Names of the animations currently playing on the entity's model.
    fn active_animation_names(&self, entity: EntityId) -> Vec<String>;

    /// World position of a named skeleton node of the entity's model.
    fn node_position_world(&self, _entity: EntityId, _node: &str) -> Option<Vec3> {
        None
    }

    /// The entity controlled by the player, if any.
    fn player_entity(&self) -> Option<EntityId>;

    fn play_visual_effect(&mut self, name: &str, position: Vec3);

    /// Inserts an invisible point object into the world. Returns `None` if
    /// there is no world to insert into.
    fn insert_transient(&mut self, position: Vec3) -> Option<EmitterHandle>;

    fn remove_transient(&mut self, handle: EmitterHandle);

    fn play_spatial_sound(&mut self, name: &str, emitter: EmitterHandle, params: SoundParams);
}
