//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, one spawn attempt per spawn timer fire
//! - Seeded RNG only
//! - Stable iteration order (by arena slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod group;
pub mod ship;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{group_collide, group_group_collide};
pub use entity::{Body, Collider, Lifespan, Sprite, collide};
pub use group::{Group, Handle};
pub use ship::{Ship, Turn};
pub use spawner::spawn_rock;
pub use state::{GameEvent, GameState, Phase, Session};
pub use tick::{TickInput, process_group, splash_contains, tick};
