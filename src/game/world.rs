//! Game World
//!
//! Fixed-capacity arena of component arrays, indexed in parallel by entity
//! id (structure of arrays). All entities are spawned at initialization and
//! live for the whole session, so the world only ever grows up to its
//! capacity and never reuses slots.
//!
//! Component data is stored in typed arrays rather than a HashMap<TypeId, ...>
//! because we know exactly what components the game needs at compile time.

use crate::math::Vec4;
use crate::render::ModelId;
use super::entity::{ComponentMask, Entity};

/// Sphere collider data for an entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collider {
    pub radius: f32,
}

/// The game world: one slot per entity across all component arrays.
///
/// The arrays are public and indexed directly with `entity.index()`; the
/// mask decides which of an entity's slots hold meaningful data.
pub struct World {
    capacity: usize,
    spawned: usize,

    /// Capability bitset per entity
    pub masks: Vec<ComponentMask>,

    /// World-space position (w = 1)
    pub positions: Vec<Vec4>,

    /// Velocity in units per millisecond (w = 0)
    pub velocities: Vec<Vec4>,

    /// Sphere collider per entity
    pub colliders: Vec<Collider>,

    /// Handle into the model library
    pub models: Vec<Option<ModelId>>,
}

impl World {
    /// Create a world with a fixed number of entity slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            spawned: 0,
            masks: vec![ComponentMask::EMPTY; capacity],
            positions: vec![Vec4::ZERO; capacity],
            velocities: vec![Vec4::ZERO; capacity],
            colliders: vec![Collider::default(); capacity],
            models: vec![None; capacity],
        }
    }

    /// Claim the next free slot. Returns `None` once the table is full.
    ///
    /// The new entity starts with an empty mask; the caller fills in the
    /// component data and then sets the mask.
    pub fn spawn(&mut self) -> Option<Entity> {
        if self.spawned >= self.capacity {
            return None;
        }
        let entity = Entity::new(self.spawned as u32);
        self.spawned += 1;
        Some(entity)
    }

    /// Number of slots handed out so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// True when the entity's mask holds every bit of `required`.
    pub fn has(&self, entity: Entity, required: ComponentMask) -> bool {
        self.masks[entity.index()].contains(required)
    }

    /// Collect every spawned entity whose mask is a superset of `required`.
    ///
    /// Returns an owned list so the caller can mutate component arrays while
    /// walking the result.
    pub fn query(&self, required: ComponentMask) -> Vec<Entity> {
        (0..self.spawned)
            .filter(|&i| self.masks[i].contains(required))
            .map(|i| Entity::new(i as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_sequential() {
        let mut world = World::with_capacity(4);
        let a = world.spawn().unwrap();
        let b = world.spawn().unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(world.spawned(), 2);
    }

    #[test]
    fn test_spawn_exhausts_capacity() {
        let mut world = World::with_capacity(2);
        assert!(world.spawn().is_some());
        assert!(world.spawn().is_some());
        assert!(world.spawn().is_none());
        assert_eq!(world.spawned(), 2);
    }

    #[test]
    fn test_query_filters_by_mask() {
        let mut world = World::with_capacity(8);
        let moving = world.spawn().unwrap();
        world.masks[moving.index()] = ComponentMask::POSITION | ComponentMask::VELOCITY;

        let scenery = world.spawn().unwrap();
        world.masks[scenery.index()] = ComponentMask::POSITION | ComponentMask::MODEL;

        let vacant = world.spawn().unwrap();
        assert_eq!(world.masks[vacant.index()], ComponentMask::EMPTY);

        let hits = world.query(ComponentMask::POSITION | ComponentMask::VELOCITY);
        assert_eq!(hits, vec![moving]);

        let positioned = world.query(ComponentMask::POSITION);
        assert_eq!(positioned, vec![moving, scenery]);
    }

    #[test]
    fn test_component_slots_track_entity() {
        let mut world = World::with_capacity(4);
        let e = world.spawn().unwrap();
        world.positions[e.index()] = Vec4::new(1.0, 2.0, 3.0, 1.0);
        world.colliders[e.index()] = Collider { radius: 0.5 };
        world.masks[e.index()] = ComponentMask::POSITION | ComponentMask::COLLIDER;

        assert!(world.has(e, ComponentMask::COLLIDER));
        assert_eq!(world.colliders[e.index()].radius, 0.5);
        assert!(world.positions[e.index()].eq3(Vec4::new(1.0, 2.0, 3.0, 0.0)));
    }
}
