//! Recording in-memory host used by the unit tests.

use std::collections::HashMap;

use bevy::math::{bounding::Aabb3d, Vec3};
use bevy_ecs::resource::Resource;

use crate::host::{EmitterHandle, EntityId, HitMaterial, MaterialGroup, RayHit, SoundParams, SplashHost};

/// Horizontal static surface, optionally limited to an xz rectangle.
#[derive(Debug, Clone)]
pub struct MockSurface {
    pub height: f32,
    pub material: Option<HitMaterial>,
    /// `(min_x, min_z, max_x, max_z)`
    pub area: Option<(f32, f32, f32, f32)>,
}

#[derive(Debug, Clone)]
pub struct MockBody {
    pub position: Vec3,
    pub bounds: Option<Aabb3d>,
    pub animations: Vec<String>,
    pub hand: Option<Vec3>,
}

impl MockBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            bounds: None,
            animations: Vec::new(),
            hand: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSound {
    pub name: String,
    pub position: Vec3,
    pub params: SoundParams,
}

#[derive(Resource)]
pub struct MockHost {
    pub ready: bool,
    pub time: f32,
    pub surfaces: Vec<MockSurface>,
    pub bodies: HashMap<EntityId, MockBody>,
    pub player: Option<EntityId>,
    pub has_world: bool,
    pub effects: Vec<(String, Vec3)>,
    pub sounds: Vec<PlayedSound>,
    pub transients: HashMap<EmitterHandle, Vec3>,
    pub transients_inserted: usize,
    next_handle: u64,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            ready: true,
            time: 10_000.0,
            surfaces: Vec::new(),
            bodies: HashMap::new(),
            player: None,
            has_world: true,
            effects: Vec::new(),
            sounds: Vec::new(),
            transients: HashMap::new(),
            transients_inserted: 0,
            next_handle: 1,
        }
    }
}

impl MockHost {
    /// Host with an unbounded lake tagged as water at `height`.
    pub fn with_lake(height: f32) -> Self {
        let mut host = Self::default();
        host.add_surface(height, Some(HitMaterial::new(MaterialGroup::Water, "LAKE")));
        host
    }

    /// Host without a world to attach sound emitters to.
    pub fn without_world() -> Self {
        Self {
            has_world: false,
            ..Self::default()
        }
    }

    pub fn add_surface(&mut self, height: f32, material: Option<HitMaterial>) {
        self.surfaces.push(MockSurface {
            height,
            material,
            area: None,
        });
    }

    pub fn spawn(&mut self, id: u64, position: Vec3) -> EntityId {
        let entity = EntityId(id);
        self.bodies.insert(entity, MockBody::at(position));
        entity
    }

    pub fn move_to(&mut self, entity: EntityId, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.position = position;
        }
    }

    pub fn body_mut(&mut self, entity: EntityId) -> &mut MockBody {
        self.bodies.get_mut(&entity).expect("body not spawned")
    }

    pub fn despawn(&mut self, entity: EntityId) {
        self.bodies.remove(&entity);
    }

    pub fn advance(&mut self, ms: f32) {
        self.time += ms;
    }

    pub fn effect_names(&self) -> Vec<&str> {
        self.effects.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl SplashHost for MockHost {
    fn is_simulation_ready(&self) -> bool {
        self.ready
    }

    fn time_ms(&self) -> f32 {
        self.time
    }

    fn trace_ray_static(&self, origin: Vec3, ray: Vec3) -> Option<RayHit> {
        let lowest = origin.y + ray.y.min(0.0);
        self.surfaces
            .iter()
            .filter(|s| s.height <= origin.y && s.height >= lowest)
            .filter(|s| match s.area {
                Some((min_x, min_z, max_x, max_z)) => {
                    origin.x >= min_x && origin.x <= max_x && origin.z >= min_z && origin.z <= max_z
                }
                None => true,
            })
            .max_by(|a, b| a.height.total_cmp(&b.height))
            .map(|s| RayHit {
                point: Vec3::new(origin.x, s.height, origin.z),
                material: s.material.clone(),
            })
    }

    fn entity_position(&self, entity: EntityId) -> Option<Vec3> {
        self.bodies.get(&entity).map(|b| b.position)
    }

    fn entity_local_bounds(&self, entity: EntityId) -> Option<Aabb3d> {
        self.bodies.get(&entity).and_then(|b| b.bounds)
    }

    fn active_animation_names(&self, entity: EntityId) -> Vec<String> {
        self.bodies
            .get(&entity)
            .map(|b| b.animations.clone())
            .unwrap_or_default()
    }

    fn node_position_world(&self, entity: EntityId, _node: &str) -> Option<Vec3> {
        self.bodies.get(&entity).and_then(|b| b.hand)
    }

    fn player_entity(&self) -> Option<EntityId> {
        self.player
    }

    fn play_visual_effect(&mut self, name: &str, position: Vec3) {
        self.effects.push((name.to_string(), position));
    }

    fn insert_transient(&mut self, position: Vec3) -> Option<EmitterHandle> {
        if !self.has_world {
            return None;
        }
        let handle = EmitterHandle(self.next_handle);
        self.next_handle += 1;
        self.transients.insert(handle, position);
        self.transients_inserted += 1;
        Some(handle)
    }

    fn remove_transient(&mut self, handle: EmitterHandle) {
        self.transients.remove(&handle);
    }

    fn play_spatial_sound(&mut self, name: &str, emitter: EmitterHandle, params: SoundParams) {
        if let Some(position) = self.transients.get(&emitter) {
            self.sounds.push(PlayedSound {
                name: name.to_string(),
                position: *position,
                params,
            });
        }
    }
}
