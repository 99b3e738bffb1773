//! Polling of recently dropped and thrown items for water contact.
//!
//! Items get no collision callback when they land in water, so every frame
//! each recent item is compared against the water level under it until it
//! either splashes or its tracking window runs out.

use bevy::math::Vec3;

use super::SplashDeduplicator;
use crate::constants::{DROPPED_ITEM_TRACK_TIME_MS, DROPPED_ITEM_WATER_TOLERANCE};
use crate::effects::{classify_bounds, play_splash, EffectSizeTier};
use crate::host::{EntityId, SplashHost};
use crate::water::water_level_at;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroppedItemRecord {
    pub entity: EntityId,
    pub drop_time_ms: f32,
    /// Resolved lazily while `None`.
    pub water_level: Option<f32>,
    pub splashed: bool,
    pub effect_size: EffectSizeTier,
}

/// What a single [`DroppedItemMonitor::update`] pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DroppedItemUpdate {
    pub splashed: usize,
    pub expired: usize,
    pub stale: usize,
}

#[derive(Debug, Default)]
pub struct DroppedItemMonitor {
    records: Vec<DroppedItemRecord>,
}

impl DroppedItemMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching an item. Items already being watched are ignored.
    pub fn track(&mut self, host: &impl SplashHost, entity: EntityId) {
        if self.find(entity).is_some() {
            return;
        }
        let Some(position) = host.entity_position(entity) else {
            return;
        };

        let effect_size = host
            .entity_local_bounds(entity)
            .map(|bounds| classify_bounds(&bounds))
            .unwrap_or_default();

        self.records.push(DroppedItemRecord {
            entity,
            drop_time_ms: host.time_ms(),
            water_level: water_level_at(host, position),
            splashed: false,
            effect_size,
        });
        log::trace!("Tracking dropped item {:?} as {:?}", entity, effect_size);
    }

    /// Runs one polling pass over all records.
    ///
    /// Records whose entity is gone are dropped first, splashed or not.
    /// Splashed records of live items stay until their window expires so
    /// that a resting item cannot be admitted and splash a second time.
    pub fn update(
        &mut self,
        host: &mut impl SplashHost,
        splashed_set: &mut SplashDeduplicator,
    ) -> DroppedItemUpdate {
        let now = host.time_ms();
        let mut result = DroppedItemUpdate::default();

        for i in (0..self.records.len()).rev() {
            if now - self.records[i].drop_time_ms > DROPPED_ITEM_TRACK_TIME_MS {
                log::trace!("Dropped item {:?} expired", self.records[i].entity);
                self.records.remove(i);
                result.expired += 1;
                continue;
            }

            let record = &mut self.records[i];
            let Some(position) = host.entity_position(record.entity) else {
                log::trace!("Dropped item {:?} no longer exists", record.entity);
                self.records.remove(i);
                result.stale += 1;
                continue;
            };
            if record.splashed {
                continue;
            }

            if record.water_level.is_none() {
                record.water_level = water_level_at(&*host, position);
            }

            if let Some(level) = record.water_level {
                if position.y <= level + DROPPED_ITEM_WATER_TOLERANCE {
                    let splash_pos = Vec3::new(position.x, level, position.z);
                    play_splash(host, splash_pos, record.effect_size);
                    record.splashed = true;
                    splashed_set.add(record.entity);
                    result.splashed += 1;
                }
            }
        }

        result
    }

    pub fn remove(&mut self, entity: EntityId) -> bool {
        match self.find(entity) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, entity: EntityId) -> Option<&DroppedItemRecord> {
        self.find(entity).map(|index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn find(&self, entity: EntityId) -> Option<usize> {
        self.records.iter().position(|r| r.entity == entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HitMaterial, MaterialGroup};
    use crate::testing::{MockHost, MockSurface};
    use bevy::math::bounding::Aabb3d;

    const FRAME_MS: f32 = 16.0;

    fn setup() -> (MockHost, DroppedItemMonitor, SplashDeduplicator) {
        (
            MockHost::with_lake(0.0),
            DroppedItemMonitor::new(),
            SplashDeduplicator::new(),
        )
    }

    #[test]
    fn test_track_records_initial_state() {
        let (mut host, mut monitor, _) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        host.body_mut(item).bounds = Some(Aabb3d::new(Vec3::ZERO, Vec3::new(10.0, 10.0, 5.0)));

        monitor.track(&host, item);
        let record = monitor.get(item).copied();
        assert_eq!(
            record,
            Some(DroppedItemRecord {
                entity: item,
                drop_time_ms: host.time,
                water_level: Some(0.0),
                splashed: false,
                effect_size: EffectSizeTier::Medium,
            })
        );
    }

    #[test]
    fn test_track_twice_is_noop() {
        let (mut host, mut monitor, _) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));

        monitor.track(&host, item);
        host.advance(1000.0);
        monitor.track(&host, item);

        assert_eq!(monitor.len(), 1);
        assert_eq!(monitor.get(item).map(|r| r.drop_time_ms), Some(10_000.0));
    }

    #[test]
    fn test_missing_bounds_defaults_to_small() {
        let (mut host, mut monitor, _) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));

        monitor.track(&host, item);
        assert_eq!(monitor.get(item).map(|r| r.effect_size), Some(EffectSizeTier::Small));
    }

    #[test]
    fn test_item_splashes_once_and_persists_until_expiry() {
        let (mut host, mut monitor, mut dedup) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        monitor.track(&host, item);

        assert_eq!(monitor.update(&mut host, &mut dedup).splashed, 0);

        // Within the tolerance band above the surface
        host.move_to(item, Vec3::new(4.0, 10.0, 2.0));
        host.advance(FRAME_MS);
        let pass = monitor.update(&mut host, &mut dedup);
        assert_eq!(pass.splashed, 1);
        assert!(dedup.contains(item));
        assert_eq!(host.effects.len(), 2);
        // Placed on the surface plus the effect offset
        assert_eq!(host.effects[0].1, Vec3::new(4.0, 5.0, 2.0));

        // Sinking further does nothing more
        for _ in 0..10 {
            host.move_to(item, Vec3::new(4.0, -40.0, 2.0));
            host.advance(FRAME_MS);
            monitor.update(&mut host, &mut dedup);
        }
        assert_eq!(host.effects.len(), 2);
        assert!(monitor.get(item).is_some_and(|r| r.splashed));

        host.advance(DROPPED_ITEM_TRACK_TIME_MS);
        let pass = monitor.update(&mut host, &mut dedup);
        assert_eq!(pass.expired, 1);
        assert!(monitor.is_empty());
    }

    #[test]
    fn test_item_never_reaching_water_expires_silently() {
        let (mut host, mut monitor, mut dedup) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        monitor.track(&host, item);

        host.advance(DROPPED_ITEM_TRACK_TIME_MS);
        // Exactly at the window is still tracked
        assert_eq!(monitor.update(&mut host, &mut dedup).expired, 0);
        assert_eq!(monitor.len(), 1);

        host.advance(1.0);
        assert_eq!(monitor.update(&mut host, &mut dedup).expired, 1);
        assert!(monitor.is_empty());
        assert!(host.effects.is_empty());
        assert!(!dedup.contains(item));
    }

    #[test]
    fn test_water_level_resolved_lazily() {
        let mut host = MockHost::default();
        let mut monitor = DroppedItemMonitor::new();
        let mut dedup = SplashDeduplicator::new();
        host.surfaces.push(MockSurface {
            height: 0.0,
            material: Some(HitMaterial::new(MaterialGroup::Water, "POND")),
            area: Some((100.0, -50.0, 300.0, 50.0)),
        });

        // Thrown from the shore: no water under the drop point
        let item = host.spawn(1, Vec3::new(0.0, 50.0, 0.0));
        monitor.track(&host, item);
        assert_eq!(monitor.get(item).and_then(|r| r.water_level), None);

        host.move_to(item, Vec3::new(150.0, 60.0, 0.0));
        host.advance(FRAME_MS);
        monitor.update(&mut host, &mut dedup);
        assert_eq!(monitor.get(item).and_then(|r| r.water_level), Some(0.0));
        assert!(host.effects.is_empty());

        host.move_to(item, Vec3::new(160.0, -2.0, 0.0));
        host.advance(FRAME_MS);
        assert_eq!(monitor.update(&mut host, &mut dedup).splashed, 1);
    }

    #[test]
    fn test_stale_item_is_dropped() {
        let (mut host, mut monitor, mut dedup) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        monitor.track(&host, item);

        host.despawn(item);
        let pass = monitor.update(&mut host, &mut dedup);
        assert_eq!(pass.stale, 1);
        assert!(monitor.is_empty());
    }

    #[test]
    fn test_splashed_item_removed_once_gone() {
        let (mut host, mut monitor, mut dedup) = setup();
        let item = host.spawn(1, Vec3::new(0.0, 5.0, 0.0));
        monitor.track(&host, item);
        assert_eq!(monitor.update(&mut host, &mut dedup).splashed, 1);

        host.despawn(item);
        host.advance(FRAME_MS);
        let pass = monitor.update(&mut host, &mut dedup);
        assert_eq!(pass.stale, 1);
        assert!(monitor.is_empty());

        // A new item reusing the identity starts a fresh window
        host.advance(1000.0);
        let reused = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        monitor.track(&host, reused);
        let record = monitor.get(reused).copied();
        assert_eq!(record.map(|r| r.drop_time_ms), Some(host.time));
        assert_eq!(record.map(|r| r.splashed), Some(false));
    }

    #[test]
    fn test_remove_by_identity() {
        let (mut host, mut monitor, _) = setup();
        let a = host.spawn(1, Vec3::new(0.0, 80.0, 0.0));
        let b = host.spawn(2, Vec3::new(5.0, 80.0, 0.0));
        monitor.track(&host, a);
        monitor.track(&host, b);

        assert!(monitor.remove(a));
        assert!(!monitor.remove(a));
        assert!(monitor.get(b).is_some());
    }
}
