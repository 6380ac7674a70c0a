//! Registration-ordered wall bookkeeping.
//!
//! Containment corrections compose sequentially, so the order walls are
//! visited in must be stable across frames. ECS query iteration gives no
//! such guarantee; this registry records entities in the order their
//! `CameraWall` component appeared and is what the containment pass walks.

use bevy::prelude::*;

/// Ordered set of entities currently carrying a `CameraWall`.
///
/// Kept in sync by `sync_wall_registry`; manual registration is only needed
/// when bypassing the plugin's systems.
#[derive(Resource, Debug, Default)]
pub struct WallRegistry {
    entities: Vec<Entity>,
}

impl WallRegistry {
    /// Appends an entity. Registering an already-known entity is a no-op,
    /// preserving its original position in the order.
    pub fn register(&mut self, entity: Entity) {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
    }

    /// Removes an entity. Unknown entities are ignored.
    pub fn unregister(&mut self, entity: Entity) {
        self.entities.retain(|candidate| *candidate != entity);
    }

    /// Walls in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = WallRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let c = Entity::from_raw(3);
        registry.register(b);
        registry.register(a);
        registry.register(c);
        let order: Vec<Entity> = registry.iter().collect();
        assert_eq!(order, vec![b, a, c]);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = WallRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        registry.register(a);
        registry.register(b);
        registry.register(a);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().next(), Some(a));
    }

    #[test]
    fn test_unregister_absent_is_noop() {
        let mut registry = WallRegistry::default();
        registry.register(Entity::from_raw(1));
        registry.unregister(Entity::from_raw(99));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_removes() {
        let mut registry = WallRegistry::default();
        let a = Entity::from_raw(1);
        registry.register(a);
        registry.unregister(a);
        assert!(registry.is_empty());
    }
}
