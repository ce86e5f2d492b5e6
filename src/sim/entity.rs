//! Moving, aging, collidable objects
//!
//! `Body` holds the kinematics shared by every entity. `Sprite` adds an
//! image and an age, and is what rocks and missiles are made of. The ship
//! composes the same `Body` (see `ship.rs`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::ImageId;
use crate::{dist, wrap_to_field};

/// Position/velocity/rotation state integrated once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation (radians)
    pub angle: f32,
    /// Rotation per tick (radians)
    pub angle_vel: f32,
    /// Collision radius (0 = non-collidable)
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, angle: f32, angle_vel: f32, radius: f32) -> Self {
        Self {
            pos,
            vel,
            angle,
            angle_vel,
            radius,
        }
    }

    /// Move by velocity with toroidal wraparound and spin by angular velocity
    pub fn advance(&mut self) {
        self.pos = wrap_to_field(self.pos + self.vel);
        self.angle += self.angle_vel;
    }
}

/// Anything with a collision circle
pub trait Collider {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;

    /// Circle-circle overlap test (touching is not a hit)
    fn collide<C: Collider + ?Sized>(&self, other: &C) -> bool {
        collide(self, other)
    }
}

impl Collider for Body {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// True iff the distance between centers is strictly less than the sum of radii
#[inline]
pub fn collide<A: Collider + ?Sized, B: Collider + ?Sized>(a: &A, b: &B) -> bool {
    dist(a.center(), b.center()) < a.radius() + b.radius()
}

/// How long an entity lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifespan {
    Ticks(u32),
    Infinite,
}

impl From<Option<u32>> for Lifespan {
    fn from(ticks: Option<u32>) -> Self {
        ticks.map_or(Lifespan::Infinite, Lifespan::Ticks)
    }
}

/// A rock or a missile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub body: Body,
    pub image: ImageId,
    /// Ticks survived so far
    pub age: u32,
    pub lifespan: Lifespan,
}

impl Sprite {
    /// Build a sprite whose radius and lifespan come from its image
    pub fn new(pos: Vec2, vel: Vec2, angle: f32, angle_vel: f32, image: ImageId) -> Self {
        let info = image.info();
        Self {
            body: Body::new(pos, vel, angle, angle_vel, info.radius),
            image,
            age: 0,
            lifespan: info.lifespan.into(),
        }
    }

    /// Advance one tick. Returns true once the sprite has expired.
    pub fn update(&mut self) -> bool {
        self.body.advance();
        self.age = self.age.saturating_add(1);
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        match self.lifespan {
            Lifespan::Ticks(ticks) => self.age >= ticks,
            Lifespan::Infinite => false,
        }
    }
}

impl Collider for Sprite {
    fn center(&self) -> Vec2 {
        self.body.pos
    }

    fn radius(&self) -> f32 {
        self.body.radius
    }
}
