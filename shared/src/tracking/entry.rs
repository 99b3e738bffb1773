//! Above/below water state per entity and the set of entities that have
//! already splashed.

use std::collections::{HashMap, HashSet};

use bevy::math::Vec3;

use crate::host::{EntityId, SplashHost};
use crate::water::water_level_at;

/// Last observation of an entity relative to the water under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedEntityState {
    pub last_position: Vec3,
    pub was_above_water: bool,
}

/// Detects above to below water crossings between two observations.
#[derive(Debug, Default)]
pub struct EntityWaterTracker {
    states: HashMap<EntityId, TrackedEntityState>,
}

impl EntityWaterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes `entity` and returns true if it went from above to below the
    /// water surface since the previous observation.
    ///
    /// The first observation only records state. Nothing is recorded where
    /// there is no water under the entity.
    pub fn check_entry(&mut self, host: &impl SplashHost, entity: EntityId) -> bool {
        let Some(position) = host.entity_position(entity) else {
            return false;
        };
        let Some(water_level) = water_level_at(host, position) else {
            return false;
        };
        let is_above_water = position.y > water_level;

        match self.states.get_mut(&entity) {
            None => {
                self.states.insert(
                    entity,
                    TrackedEntityState {
                        last_position: position,
                        was_above_water: is_above_water,
                    },
                );
                false
            }
            Some(state) => {
                let entered = state.was_above_water && !is_above_water;
                state.last_position = position;
                state.was_above_water = is_above_water;
                entered
            }
        }
    }

    pub fn get(&self, entity: EntityId) -> Option<&TrackedEntityState> {
        self.states.get(&entity)
    }

    pub fn remove(&mut self, entity: EntityId) -> Option<TrackedEntityState> {
        self.states.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Entities that already produced a splash.
#[derive(Debug, Default)]
pub struct SplashDeduplicator {
    splashed: HashSet<EntityId>,
}

impl SplashDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entity as splashed. Adding an entity twice is harmless.
    pub fn add(&mut self, entity: EntityId) {
        self.splashed.insert(entity);
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.splashed.contains(&entity)
    }

    pub fn remove(&mut self, entity: EntityId) -> bool {
        self.splashed.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.splashed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splashed.is_empty()
    }

    pub fn clear(&mut self) {
        self.splashed.clear();
    }
}
