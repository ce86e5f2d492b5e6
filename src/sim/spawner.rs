//! Timed rock spawning
//!
//! Called from the host's fixed 1000 ms timer, not the frame tick.

use glam::Vec2;
use rand::Rng;

use super::entity::Sprite;
use super::group::Handle;
use super::state::{GameState, Phase};
use crate::assets::ImageId;
use crate::consts::*;
use crate::dist;

/// Try to add one rock at a random spot.
///
/// No-op outside `Phase::Playing` or when the field already holds
/// `MAX_ROCKS`. A candidate closer than `MIN_SPAWN_DISTANCE` to the ship is
/// dropped without retrying.
pub fn spawn_rock(state: &mut GameState) -> Option<Handle> {
    if state.session.phase != Phase::Playing {
        return None;
    }

    let pos = Vec2::new(
        state.rng.random_range(0..WIDTH as u32) as f32,
        state.rng.random_range(0..HEIGHT as u32) as f32,
    );
    let vel = Vec2::new(
        state.rng.random::<f32>() * 2.0 * ROCK_MAX_SPEED - ROCK_MAX_SPEED,
        state.rng.random::<f32>() * 2.0 * ROCK_MAX_SPEED - ROCK_MAX_SPEED,
    );
    let angle_vel = state.rng.random::<f32>() * 2.0 * ROCK_MAX_SPIN - ROCK_MAX_SPIN;

    if state.rocks.len() >= MAX_ROCKS {
        return None;
    }

    let distance = dist(pos, state.ship.body.pos);
    if distance < MIN_SPAWN_DISTANCE {
        log::debug!("Rock spawn at {pos} rejected ({distance:.1} from ship)");
        return None;
    }

    let handle = state
        .rocks
        .insert(Sprite::new(pos, vel, 0.0, angle_vel, ImageId::Asteroid));
    log::debug!("Spawned rock at {pos} ({} alive)", state.rocks.len());
    Some(handle)
}
