//! A small stand-in for a game world: water pools over flat ground, bodies
//! falling under gravity, and one player.

use std::collections::HashMap;

use bevy::math::{bounding::Aabb3d, Vec2, Vec3};
use bevy::prelude::Resource;
use splash_shared::{
    EmitterHandle, EntityId, HitMaterial, MaterialGroup, RayHit, SoundParams, SplashHost,
    WEAPON_HAND_NODE,
};

/// Gravity in world units (centimetres) per second squared.
pub const GRAVITY: f32 = 981.0;
/// Fraction of velocity lost per second while under water.
pub const WATER_DRAG: f32 = 2.0;
/// Ground height outside of any pool.
pub const SHORE_HEIGHT: f32 = 20.0;
/// Right hand offset from the player origin.
pub const HAND_OFFSET: Vec3 = Vec3::new(30.0, 90.0, 0.0);

#[derive(Debug, Clone)]
pub struct WaterPool {
    pub min: Vec2,
    pub max: Vec2,
    pub surface: f32,
    pub bottom: f32,
    pub material: HitMaterial,
}

impl WaterPool {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Arrow,
    Item,
    Player,
}

#[derive(Debug, Clone)]
pub struct SceneBody {
    pub kind: BodyKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub bounds: Aabb3d,
    pub resting: bool,
}

/// What happened to an arrow during [`DemoScene::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEvent {
    Stepped(EntityId),
    HitGround(EntityId),
    Removed(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayedEffect {
    pub name: String,
    pub position: Vec3,
}

#[derive(Resource)]
pub struct DemoScene {
    pub ready: bool,
    pub time_ms: f32,
    pub pools: Vec<WaterPool>,
    pub player: Option<EntityId>,
    pub player_animations: Vec<String>,
    pub played_effects: Vec<PlayedEffect>,
    pub played_sounds: usize,
    bodies: HashMap<EntityId, SceneBody>,
    emitters: HashMap<EmitterHandle, Vec3>,
    pending_removal: Vec<EntityId>,
    next_id: u64,
}

impl DemoScene {
    pub fn new(pools: Vec<WaterPool>) -> Self {
        Self {
            ready: true,
            time_ms: 0.0,
            pools,
            player: None,
            player_animations: Vec::new(),
            played_effects: Vec::new(),
            played_sounds: 0,
            bodies: HashMap::new(),
            emitters: HashMap::new(),
            pending_removal: Vec::new(),
            next_id: 1,
        }
    }

    /// A lake tagged as water and a shallow ford whose texture is only
    /// recognisable by name.
    pub fn lake_shore() -> Self {
        Self::new(vec![
            WaterPool {
                min: Vec2::new(0.0, -1500.0),
                max: Vec2::new(3000.0, 1500.0),
                surface: 0.0,
                bottom: -300.0,
                material: HitMaterial::new(MaterialGroup::Water, "NW_LAKE_01"),
            },
            WaterPool {
                min: Vec2::new(-3000.0, -500.0),
                max: Vec2::new(-2000.0, 500.0),
                surface: 0.0,
                bottom: -40.0,
                material: HitMaterial::new(MaterialGroup::Undefined, "NW_River_Wasser_01"),
            },
        ])
    }

    pub fn spawn(&mut self, kind: BodyKind, position: Vec3, velocity: Vec3, half_size: Vec3) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(
            id,
            SceneBody {
                kind,
                position,
                velocity,
                bounds: Aabb3d::new(Vec3::ZERO, half_size),
                resting: false,
            },
        );
        id
    }

    pub fn body(&self, id: EntityId) -> Option<&SceneBody> {
        self.bodies.get(&id)
    }

    fn pool_at(&self, x: f32, z: f32) -> Option<&WaterPool> {
        self.pools.iter().find(|pool| pool.contains(x, z))
    }

    fn ground_at(&self, x: f32, z: f32) -> f32 {
        self.pool_at(x, z).map_or(SHORE_HEIGHT, |pool| pool.bottom)
    }

    fn water_surface_at(&self, x: f32, z: f32) -> Option<f32> {
        self.pool_at(x, z).map(|pool| pool.surface)
    }

    /// Advances the clock and moves every loose body. Arrows that reached the
    /// ground on the previous step are removed now, so that the splash system
    /// still sees them when handling their ground collision.
    pub fn step(&mut self, dt_ms: f32) -> Vec<ArrowEvent> {
        self.time_ms += dt_ms;
        let dt = dt_ms / 1000.0;
        let mut events = Vec::new();

        for id in self.pending_removal.drain(..) {
            self.bodies.remove(&id);
            events.push(ArrowEvent::Removed(id));
        }

        let mut ids: Vec<EntityId> = self.bodies.keys().copied().collect();
        ids.sort();

        for id in ids {
            let ground = {
                let body = &self.bodies[&id];
                if body.kind == BodyKind::Player || body.resting {
                    continue;
                }
                self.ground_at(body.position.x, body.position.z)
            };
            let surface = {
                let body = &self.bodies[&id];
                self.water_surface_at(body.position.x, body.position.z)
            };

            let Some(body) = self.bodies.get_mut(&id) else {
                continue;
            };
            body.velocity.y -= GRAVITY * dt;
            if surface.is_some_and(|level| body.position.y < level) {
                body.velocity *= (1.0 - WATER_DRAG * dt).max(0.0);
            }
            body.position += body.velocity * dt;

            if body.position.y <= ground {
                body.position.y = ground;
                body.velocity = Vec3::ZERO;
                body.resting = true;
            }

            if body.kind == BodyKind::Arrow {
                events.push(ArrowEvent::Stepped(id));
                if body.resting {
                    events.push(ArrowEvent::HitGround(id));
                    self.pending_removal.push(id);
                }
            }
        }

        events
    }

    pub fn effect_count(&self, name: &str) -> usize {
        self.played_effects.iter().filter(|e| e.name == name).count()
    }
}

impl SplashHost for DemoScene {
    fn is_simulation_ready(&self) -> bool {
        self.ready
    }

    fn time_ms(&self) -> f32 {
        self.time_ms
    }

    fn trace_ray_static(&self, origin: Vec3, ray: Vec3) -> Option<RayHit> {
        let end = origin.y + ray.y;
        let (low, high) = (end.min(origin.y), end.max(origin.y));
        let in_range = |height: f32| height >= low && height <= high;

        let ground = self.ground_at(origin.x, origin.z);
        let pool = self.pool_at(origin.x, origin.z);

        // Casting down, the higher polygon is hit first
        match pool {
            Some(pool) if in_range(pool.surface) => Some(RayHit {
                point: Vec3::new(origin.x, pool.surface, origin.z),
                material: Some(pool.material.clone()),
            }),
            _ if in_range(ground) => Some(RayHit {
                point: Vec3::new(origin.x, ground, origin.z),
                material: Some(HitMaterial::new(MaterialGroup::Earth, "NW_GROUND_GRASS")),
            }),
            _ => None,
        }
    }

    fn entity_position(&self, entity: EntityId) -> Option<Vec3> {
        self.bodies.get(&entity).map(|body| body.position)
    }

    fn entity_local_bounds(&self, entity: EntityId) -> Option<Aabb3d> {
        self.bodies.get(&entity).map(|body| body.bounds)
    }

    fn active_animation_names(&self, entity: EntityId) -> Vec<String> {
        if self.player == Some(entity) {
            self.player_animations.clone()
        } else {
            Vec::new()
        }
    }

    fn node_position_world(&self, entity: EntityId, node: &str) -> Option<Vec3> {
        if node != WEAPON_HAND_NODE || self.player != Some(entity) {
            return None;
        }
        self.entity_position(entity).map(|pos| pos + HAND_OFFSET)
    }

    fn player_entity(&self) -> Option<EntityId> {
        self.player
    }

    fn play_visual_effect(&mut self, name: &str, position: Vec3) {
        self.played_effects.push(PlayedEffect {
            name: name.to_string(),
            position,
        });
    }

    fn insert_transient(&mut self, position: Vec3) -> Option<EmitterHandle> {
        let handle = EmitterHandle(self.next_id);
        self.next_id += 1;
        self.emitters.insert(handle, position);
        Some(handle)
    }

    fn remove_transient(&mut self, handle: EmitterHandle) {
        self.emitters.remove(&handle);
    }

    fn play_spatial_sound(&mut self, name: &str, emitter: EmitterHandle, params: SoundParams) {
        if let Some(position) = self.emitters.get(&emitter) {
            log::trace!(
                "Sound {} at {:?} (volume {}, radius {})",
                name,
                position,
                params.volume,
                params.radius
            );
            self.played_sounds += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_finds_lake_before_bottom() {
        let scene = DemoScene::lake_shore();
        let hit = scene
            .trace_ray_static(Vec3::new(100.0, 500.0, 0.0), Vec3::new(0.0, -1000.0, 0.0))
            .unwrap();
        assert_eq!(hit.point.y, 0.0);
        assert_eq!(hit.material.map(|m| m.group), Some(MaterialGroup::Water));
    }

    #[test]
    fn test_ray_on_shore_hits_ground() {
        let scene = DemoScene::lake_shore();
        let hit = scene
            .trace_ray_static(Vec3::new(-500.0, 500.0, 0.0), Vec3::new(0.0, -1000.0, 0.0))
            .unwrap();
        assert_eq!(hit.point.y, SHORE_HEIGHT);
        assert_eq!(hit.material.map(|m| m.group), Some(MaterialGroup::Earth));
    }

    #[test]
    fn test_arrow_removed_the_step_after_landing() {
        let mut scene = DemoScene::lake_shore();
        let arrow = scene.spawn(BodyKind::Arrow, Vec3::new(-500.0, 25.0, 0.0), Vec3::new(0.0, -600.0, 0.0), Vec3::ONE);

        let events = scene.step(16.0);
        assert!(events.contains(&ArrowEvent::HitGround(arrow)));
        assert!(scene.entity_position(arrow).is_some());

        let events = scene.step(16.0);
        assert_eq!(events, vec![ArrowEvent::Removed(arrow)]);
        assert!(scene.entity_position(arrow).is_none());
    }

    #[test]
    fn test_items_come_to_rest() {
        let mut scene = DemoScene::lake_shore();
        let item = scene.spawn(BodyKind::Item, Vec3::new(-500.0, 60.0, 0.0), Vec3::ZERO, Vec3::splat(5.0));

        for _ in 0..100 {
            scene.step(16.0);
        }
        let body = scene.body(item).unwrap();
        assert!(body.resting);
        assert_eq!(body.position.y, SHORE_HEIGHT);
    }

    #[test]
    fn test_hand_node_only_for_player() {
        let mut scene = DemoScene::lake_shore();
        let player = scene.spawn(BodyKind::Player, Vec3::new(150.0, -60.0, 0.0), Vec3::ZERO, Vec3::splat(40.0));
        scene.player = Some(player);

        assert_eq!(
            scene.node_position_world(player, WEAPON_HAND_NODE),
            Some(Vec3::new(180.0, 30.0, 0.0))
        );
        assert_eq!(scene.node_position_world(player, "BIP01 HEAD"), None);
    }
}
