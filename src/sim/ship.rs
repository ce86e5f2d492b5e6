//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Collider, Sprite};
use crate::angle_to_vector;
use crate::assets::ImageId;
use crate::consts::*;

/// Which way the ship is being turned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    None,
    Left,
    Right,
}

impl Turn {
    /// Angular velocity for this turn state (radians per tick)
    pub fn angle_vel(self) -> f32 {
        match self {
            Turn::None => 0.0,
            Turn::Left => -SHIP_TURN_RATE,
            Turn::Right => SHIP_TURN_RATE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Engine on
    pub thrust: bool,
    pub accel: f32,
    pub friction: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(FIELD / 2.0)
    }
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, 0.0, 0.0, ImageId::Ship.info().radius),
            thrust: false,
            accel: SHIP_ACCEL,
            friction: SHIP_FRICTION,
        }
    }

    /// Unit vector along the ship's heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        angle_to_vector(self.body.angle)
    }

    /// Move, spin, then apply friction and (if thrusting) acceleration
    pub fn update(&mut self) {
        self.body.advance();

        self.body.vel *= 1.0 - self.friction;
        if self.thrust {
            self.body.vel += self.forward() * self.accel;
        }
    }

    pub fn set_turn(&mut self, turn: Turn) {
        self.body.angle_vel = turn.angle_vel();
    }

    /// Switch the engine. Returns true if the state changed.
    pub fn set_thrust(&mut self, on: bool) -> bool {
        let changed = self.thrust != on;
        self.thrust = on;
        changed
    }

    /// Source-rect center in the sprite sheet (thrust frame sits one cell right)
    pub fn image_center(&self) -> Vec2 {
        let center = ImageId::Ship.info().center;
        if self.thrust {
            center + Vec2::new(SHIP_THRUST_FRAME_OFFSET, 0.0)
        } else {
            center
        }
    }

    /// Build a missile leaving the ship's nose
    pub fn shoot(&self) -> Sprite {
        let forward = self.forward();
        let vel = self.body.vel + forward * MISSILE_SPEED;
        let pos = self.body.pos + forward * MISSILE_NOSE_OFFSET;
        Sprite::new(pos, vel, self.body.angle, 0.0, ImageId::Missile)
    }
}

impl Collider for Ship {
    fn center(&self) -> Vec2 {
        self.body.pos
    }

    fn radius(&self) -> f32 {
        self.body.radius
    }
}
