//! Lesson World
//!
//! The World owns everything that exists in a lesson scene:
//! - Entity allocation and lifetime tracking
//! - Component storage (bodies, appearances, movement models, markers)
//!
//! It does no drawing and no input handling itself. The renderer reads
//! `draw_order()`, and lessons hand it a `Controller` each frame.

use macroquad::prelude::Vec2;
use crate::input::Controller;
use super::body::{Appearance, PhysicsBody};
use super::component::ComponentStorage;
use super::entity::{Entity, EntityAllocator};
use super::movement::{DirectMover, Thruster};
use super::physics::Physics;

/// Marks the player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player;

/// Container for every object in a scene.
///
/// Component types are fixed fields rather than a type-keyed map; the
/// lessons only ever need these few.
pub struct World {
    entities: EntityAllocator,

    // =========================================================================
    // Physical state
    // =========================================================================

    pub bodies: ComponentStorage<PhysicsBody>,

    /// How to draw the entity; entities without one are invisible
    pub appearances: ComponentStorage<Appearance>,

    // =========================================================================
    // Movement models
    // =========================================================================

    /// Position follows input directly
    pub movers: ComponentStorage<DirectMover>,

    /// Input adds velocity
    pub thrusters: ComponentStorage<Thruster>,

    // =========================================================================
    // Markers
    // =========================================================================

    pub players: ComponentStorage<Player>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            bodies: ComponentStorage::new(),
            appearances: ComponentStorage::new(),
            movers: ComponentStorage::new(),
            thrusters: ComponentStorage::new(),
            players: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Entity Management
    // =========================================================================

    /// Spawn an entity with a body and an appearance.
    pub fn spawn(&mut self, body: PhysicsBody, appearance: Appearance) -> Entity {
        let entity = self.entities.allocate();
        self.bodies.insert(entity, body);
        self.appearances.insert(entity, appearance);
        entity
    }

    /// Spawn a static circular planet.
    pub fn spawn_planet(&mut self, position: Vec2, radius: f32, mass: f32, rgb: [u8; 3]) -> Entity {
        self.spawn(PhysicsBody::fixed(position, mass, radius), Appearance::circle(rgb))
    }

    /// Spawn the player. Attach a movement model afterwards
    /// (`movers` or `thrusters`).
    pub fn spawn_player(&mut self, body: PhysicsBody, appearance: Appearance) -> Entity {
        let entity = self.spawn(body, appearance);
        self.players.insert(entity, Player);
        entity
    }

    /// Remove an entity and all its components. Stale handles are ignored.
    pub fn despawn(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return;
        }

        let idx = entity.index();
        self.bodies.clear_slot(idx);
        self.appearances.clear_slot(idx);
        self.movers.clear_slot(idx);
        self.thrusters.clear_slot(idx);
        self.players.clear_slot(idx);
    }

    /// Remove everything, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.bodies.clear();
        self.appearances.clear();
        self.movers.clear();
        self.thrusters.clear();
        self.players.clear();
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First live player entity
    pub fn player(&self) -> Option<Entity> {
        self.players
            .iter()
            .find_map(|(idx, _)| self.entities.entity_at(idx))
    }

    pub fn body(&self, entity: Entity) -> Option<&PhysicsBody> {
        if !self.is_alive(entity) {
            return None;
        }
        self.bodies.get(entity)
    }

    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.body(entity).map(|b| b.position)
    }

    /// Drawable entities, back to front: larger radius first, so planets
    /// end up underneath the small things orbiting them.
    pub fn draw_order(&self) -> Vec<Entity> {
        let mut order: Vec<(Entity, f32)> = self
            .appearances
            .iter()
            .filter_map(|(idx, _)| {
                let entity = self.entities.entity_at(idx)?;
                let body = self.bodies.get_slot(idx)?;
                Some((entity, body.radius))
            })
            .collect();
        // Stable: equal radii keep spawn order
        order.sort_by(|a, b| b.1.total_cmp(&a.1));
        order.into_iter().map(|(entity, _)| entity).collect()
    }

    // =========================================================================
    // Systems
    // =========================================================================

    /// Move every `DirectMover` entity along the controller axis.
    pub fn apply_direct_movement(&mut self, controller: &Controller, dt: f32) {
        for (idx, body) in self.bodies.iter_mut() {
            if let Some(mover) = self.movers.get_slot(idx) {
                mover.step(&mut body.position, controller, dt);
            }
        }
    }

    /// Feed the controller into every `Thruster` entity's velocity.
    pub fn apply_thrust(&mut self, controller: &Controller, dt: f32) {
        for (idx, body) in self.bodies.iter_mut() {
            if let Some(thruster) = self.thrusters.get_slot(idx) {
                thruster.apply(body, controller, dt);
            }
        }
    }

    /// Run one physics step over every body in the world.
    pub fn step_physics(&mut self, physics: &Physics, dt: f32) {
        let mut bodies: Vec<PhysicsBody> = self.bodies.iter().map(|(_, b)| *b).collect();
        physics.step(&mut bodies, dt);
        // Same slot order both ways
        for ((_, body), stepped) in self.bodies.iter_mut().zip(bodies) {
            *body = stepped;
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_despawn() {
        let mut world = World::new();

        let e1 = world.spawn(PhysicsBody::default(), Appearance::circle([255, 255, 255]));
        let e2 = world.spawn_planet(Vec2::new(200.0, 150.0), 40.0, 5000.0, [0, 120, 255]);
        assert_eq!(world.entity_count(), 2);

        world.despawn(e1);
        assert_eq!(world.entity_count(), 1);
        assert!(!world.is_alive(e1));
        assert!(world.is_alive(e2));
        assert!(world.body(e1).is_none());
    }

    #[test]
    fn test_despawn_twice_is_harmless() {
        let mut world = World::new();
        let e = world.spawn(PhysicsBody::default(), Appearance::circle([1, 2, 3]));
        let kept = world.spawn(PhysicsBody::default(), Appearance::circle([1, 2, 3]));

        world.despawn(e);
        world.despawn(e);
        assert!(!world.is_alive(e));
        assert!(world.is_alive(kept));
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn test_despawn_clears_every_component() {
        let mut world = World::new();
        let player = world.spawn_player(PhysicsBody::default(), Appearance::circle([255, 255, 0]));
        world.thrusters.insert(player, Thruster::default());
        world.movers.insert(player, DirectMover::new(3.0));

        world.despawn(player);
        let slot = player.index();
        assert!(world.bodies.get_slot(slot).is_none());
        assert!(world.appearances.get_slot(slot).is_none());
        assert!(world.thrusters.get_slot(slot).is_none());
        assert!(world.movers.get_slot(slot).is_none());
        assert!(world.player().is_none());
    }

    #[test]
    fn test_stale_handle_does_not_see_new_entity() {
        let mut world = World::new();
        let old = world.spawn(PhysicsBody::default(), Appearance::circle([0, 0, 0]));
        world.despawn(old);
        let new = world.spawn(PhysicsBody::new(Vec2::new(5.0, 5.0), 1.0, 3.0), Appearance::circle([0, 0, 0]));

        assert_eq!(old.index(), new.index());
        assert!(world.position(old).is_none());
        assert_eq!(world.position(new), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_spawn_player() {
        let mut world = World::new();
        assert!(world.player().is_none());

        world.spawn_planet(Vec2::ZERO, 40.0, 5000.0, [0, 120, 255]);
        let player = world.spawn_player(PhysicsBody::default(), Appearance::circle([255, 255, 0]));
        assert_eq!(world.player(), Some(player));
        assert!(world.players.get(player).is_some());
    }

    #[test]
    fn test_draw_order_largest_first() {
        let mut world = World::new();
        let small = world.spawn(PhysicsBody::new(Vec2::ZERO, 1.0, 10.0), Appearance::circle([0, 0, 0]));
        let big = world.spawn_planet(Vec2::ZERO, 40.0, 5000.0, [0, 0, 0]);
        let medium = world.spawn(PhysicsBody::new(Vec2::ZERO, 1.0, 20.0), Appearance::circle([0, 0, 0]));

        assert_eq!(world.draw_order(), vec![big, medium, small]);
    }

    #[test]
    fn test_direct_movement_only_moves_movers() {
        let mut world = World::new();
        let player = world.spawn_player(PhysicsBody::default(), Appearance::circle([255, 255, 0]));
        world.movers.insert(player, DirectMover::new(3.0));
        let planet = world.spawn_planet(Vec2::new(200.0, 150.0), 40.0, 5000.0, [0, 120, 255]);

        let controller = Controller { right: true, ..Controller::default() };
        world.apply_direct_movement(&controller, 1.0);

        assert_eq!(world.position(player), Some(Vec2::new(3.0, 0.0)));
        assert_eq!(world.position(planet), Some(Vec2::new(200.0, 150.0)));
    }

    #[test]
    fn test_thrust_then_physics() {
        let mut world = World::new();
        let player = world.spawn_player(PhysicsBody::default(), Appearance::circle([255, 255, 0]));
        world.thrusters.insert(player, Thruster::default());

        let controller = Controller { down: true, ..Controller::default() };
        world.apply_thrust(&controller, 1.0);
        world.step_physics(&Physics::default(), 1.0);

        let body = world.body(player).copied().unwrap_or_default();
        assert!((body.velocity.y - 0.1).abs() < 1e-6);
        assert!((body.position.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_step_physics_pulls_player_toward_planet() {
        let mut world = World::new();
        let planet = world.spawn_planet(Vec2::new(100.0, 0.0), 10.0, 5000.0, [0, 0, 0]);
        let player = world.spawn_player(PhysicsBody::new(Vec2::ZERO, 1.0, 10.0), Appearance::circle([0, 0, 0]));

        world.step_physics(&Physics::default(), 1.0);

        assert!(world.position(player).map_or(false, |p| p.x > 0.0));
        assert_eq!(world.position(planet), Some(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        let e = world.spawn_player(PhysicsBody::default(), Appearance::circle([0, 0, 0]));
        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert!(!world.is_alive(e));
        assert!(world.player().is_none());
        assert!(world.draw_order().is_empty());
    }
}
