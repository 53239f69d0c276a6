//! Entity handles with generational indices
//!
//! Every object that lives in a lesson world (player, planet, moon) is an
//! `Entity`. Slots are reused after despawn, and the generation counter
//! makes stale handles to a removed object stop matching its replacement.

/// A handle to something in the world.
///
/// Two entities with the same index but different generations are different
/// objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Should only be called by `EntityAllocator`.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, used to address component storage.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Placeholder for "no entity" (e.g. a camera with no target yet).
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// Hands out entity slots and tracks which generation of each is alive.
pub struct EntityAllocator {
    generations: Vec<u32>,
    /// Whether the current generation of each slot is alive
    alive: Vec<bool>,
    /// Freed slots, reused LIFO
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            alive: Vec::new(),
            free_indices: Vec::new(),
            alive_count: 0,
        }
    }

    /// Allocate a new entity, reusing a freed slot when one exists.
    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped when the slot was freed
            self.alive[index as usize] = true;
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.alive.push(true);
            Entity::new(index, 0)
        }
    }

    /// Free an entity. Returns true if it was alive.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let idx = entity.index as usize;
        self.generations[idx] += 1;
        self.alive[idx] = false;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        let idx = entity.index as usize;
        idx < self.generations.len() && self.alive[idx] && self.generations[idx] == entity.generation
    }

    /// The live entity occupying a slot, if any.
    ///
    /// Component storage iterates by slot index; this turns that index back
    /// into a handle.
    pub fn entity_at(&self, index: u32) -> Option<Entity> {
        let idx = index as usize;
        if idx < self.alive.len() && self.alive[idx] {
            Some(Entity::new(index, self.generations[idx]))
        } else {
            None
        }
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }

    /// Drop every entity, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        for (idx, gen) in self.generations.iter_mut().enumerate() {
            if self.alive[idx] {
                *gen += 1;
            }
        }
        self.alive.iter_mut().for_each(|a| *a = false);
        self.free_indices = (0..self.generations.len() as u32).rev().collect();
        self.alive_count = 0;
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
