//! Game Foundation Module
//!
//! The small engine the lessons build up step by step:
//! - Entity / Component: generational handles and sparse storage
//! - Body: physical state plus an appearance tag (data only)
//! - World: the container for everything in a scene
//! - Physics: gravity, integration, circle collision
//! - Camera: world-to-screen translation
//! - Movement / Platform: player models and side-scroller terrain
//! - Renderer: draws a world through a camera
//!
//! Everything except the renderer is free of macroquad context calls, so it
//! runs under plain unit tests.

pub mod entity;
pub mod component;
pub mod body;
pub mod world;
pub mod physics;
pub mod camera;
pub mod movement;
pub mod platform;
pub mod renderer;

pub use entity::Entity;
pub use body::{rgb_color, Appearance, PhysicsBody};
pub use world::World;
pub use physics::Physics;
pub use camera::{Camera, CameraMode};
pub use movement::{DirectMover, Jumper, Thruster};
pub use platform::{Platform, Terrain};
pub use renderer::{draw_appearance, draw_terrain, draw_world};
