//! Component storage
//!
//! `ComponentStorage<T>` is a sparse array keyed by entity slot index. Lesson
//! worlds hold a handful of bodies, so a flat `Vec<Option<T>>` beats anything
//! cleverer and keeps iteration order stable (slot order), which the physics
//! step relies on when it copies bodies out and writes them back.

use super::entity::Entity;

pub struct ComponentStorage<T> {
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert a component for an entity, replacing any existing one.
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        self.ensure_capacity(idx);
        self.data[idx] = Some(component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.get_slot(entity.index())
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity.index() as usize).and_then(|opt| opt.as_mut())
    }

    /// Look up by raw slot index (no generation check).
    pub fn get_slot(&self, index: u32) -> Option<&T> {
        self.data.get(index as usize).and_then(|opt| opt.as_ref())
    }

    /// Iterate over all (slot index, component) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_ref().map(|c| (idx as u32, c)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_mut().map(|c| (idx as u32, c)))
    }

    /// Called on despawn to drop whatever the slot held.
    pub fn clear_slot(&mut self, index: u32) {
        if let Some(slot) = self.data.get_mut(index as usize) {
            *slot = None;
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut storage: ComponentStorage<f32> = ComponentStorage::new();
        let entity = Entity::new(5, 0);

        storage.insert(entity, 40.0);
        assert_eq!(storage.get(entity), Some(&40.0));
        assert_eq!(storage.get(Entity::new(4, 0)), None);
    }

    #[test]
    fn test_clear_slot() {
        let mut storage: ComponentStorage<&str> = ComponentStorage::new();
        let a = Entity::new(0, 0);
        let b = Entity::new(3, 0);

        storage.insert(a, "planet");
        storage.insert(b, "moon");
        storage.clear_slot(b.index());
        assert_eq!(storage.get(b), None);
        assert_eq!(storage.get(a), Some(&"planet"));
        // Out of range is harmless
        storage.clear_slot(100);
    }

    #[test]
    fn test_iteration_is_in_slot_order() {
        let mut storage: ComponentStorage<u8> = ComponentStorage::new();
        storage.insert(Entity::new(4, 0), 4);
        storage.insert(Entity::new(1, 0), 1);
        storage.insert(Entity::new(2, 0), 2);

        let slots: Vec<u32> = storage.iter().map(|(i, _)| i).collect();
        assert_eq!(slots, vec![1, 2, 4]);

        for (_, v) in storage.iter_mut() {
            *v *= 10;
        }
        assert_eq!(storage.get_slot(4), Some(&40));
    }
}
