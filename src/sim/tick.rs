//! Per-frame simulation tick
//!
//! Order within a frame: apply input, advance the clock, move the ship,
//! move and age both groups (dropping expired sprites), missiles vs rocks,
//! rocks vs ship, then the game-over check. Drawing happens afterwards
//! from the resulting state (see `renderer`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{group_collide, group_group_collide};
use super::entity::Sprite;
use super::group::Group;
use super::ship::Turn;
use super::state::{GameEvent, GameState};
use crate::assets::ImageId;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held turn direction
    pub turn: Turn,
    /// Up held
    pub thrust: bool,
    /// Missiles to fire this tick
    pub shots: u32,
    /// Mouse click position
    pub click: Option<Vec2>,
}

/// True if `pos` lands strictly inside the centered splash image
pub fn splash_contains(pos: Vec2) -> bool {
    let center = FIELD / 2.0;
    let half = ImageId::Splash.info().size / 2.0;
    let min = center - half;
    let max = center + half;
    min.x < pos.x && pos.x < max.x && min.y < pos.y && pos.y < max.y
}

/// Update every sprite in a group and drop the expired ones
pub fn process_group(group: &mut Group<Sprite>) -> u32 {
    let mut expired = 0;
    for handle in group.handles() {
        let done = group.get_mut(handle).is_some_and(Sprite::update);
        if done {
            group.remove(handle);
            expired += 1;
        }
    }
    expired
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(pos) = input.click {
        if !state.session.is_started() && splash_contains(pos) {
            state.start();
        }
    }

    state.ship.set_turn(input.turn);
    if state.ship.set_thrust(input.thrust) {
        state.push_event(if input.thrust {
            GameEvent::ThrustOn
        } else {
            GameEvent::ThrustOff
        });
    }
    for _ in 0..input.shots {
        let missile = state.ship.shoot();
        state.missiles.insert(missile);
        state.push_event(GameEvent::MissileFired);
    }

    state.session.time += 1.0;
    state.ship.update();

    process_group(&mut state.rocks);
    process_group(&mut state.missiles);

    let hits = group_group_collide(&mut state.rocks, &mut state.missiles);
    if hits > 0 {
        state.session.score += hits;
        state.push_event(GameEvent::RocksDestroyed { hits });
    }

    let rocks = group_collide(&mut state.rocks, &state.ship);
    if rocks > 0 {
        state.session.lives -= rocks as i32;
        state.push_event(GameEvent::ShipHit { rocks });
    }
    log::trace!(
        "tick {}: {hits} missile hits, {rocks} ship hits",
        state.session.time
    );

    if state.session.lives <= 0 {
        state.game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Phase;

    fn rock_at(pos: Vec2) -> Sprite {
        Sprite::new(pos, Vec2::ZERO, 0.0, 0.0, ImageId::Asteroid)
    }

    fn missile_at(pos: Vec2) -> Sprite {
        Sprite::new(pos, Vec2::ZERO, 0.0, 0.0, ImageId::Missile)
    }

    fn click(x: f32, y: f32) -> TickInput {
        TickInput {
            click: Some(Vec2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_splash_rect() {
        assert!(splash_contains(Vec2::new(400.0, 300.0)));
        assert!(splash_contains(Vec2::new(201.0, 151.0)));
        // Edges are outside
        assert!(!splash_contains(Vec2::new(200.0, 300.0)));
        assert!(!splash_contains(Vec2::new(400.0, 450.0)));
        assert!(!splash_contains(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_click_starts_game() {
        let mut state = GameState::new(1);
        state.session.score = 5;

        tick(&mut state, &click(10.0, 10.0));
        assert_eq!(state.session.phase, Phase::Splash);

        tick(&mut state, &click(400.0, 300.0));
        assert_eq!(state.session.phase, Phase::Playing);
        assert_eq!(state.session.score, 0);
        assert!(state.drain_events().contains(&GameEvent::GameStarted));
    }

    #[test]
    fn test_click_while_playing_does_nothing() {
        let mut state = GameState::new(1);
        state.start();
        state.session.score = 9;
        tick(&mut state, &click(400.0, 300.0));
        assert_eq!(state.session.score, 9);
    }

    #[test]
    fn test_holding_up_accelerates_until_released() {
        let mut state = GameState::new(1);
        state.start();
        state.drain_events();
        let hold = TickInput {
            thrust: true,
            ..Default::default()
        };

        tick(&mut state, &hold);
        assert_eq!(state.drain_events(), vec![GameEvent::ThrustOn]);
        for _ in 0..9 {
            let before = state.ship.body.vel.x;
            tick(&mut state, &hold);
            let gained = state.ship.body.vel.x - before * (1.0 - SHIP_FRICTION);
            assert!((gained - SHIP_ACCEL).abs() < 1e-5);
        }
        assert!(state.drain_events().is_empty());

        tick(&mut state, &TickInput::default());
        assert_eq!(state.drain_events(), vec![GameEvent::ThrustOff]);
        let before = state.ship.body.vel.x;
        tick(&mut state, &TickInput::default());
        assert!((state.ship.body.vel.x - before * (1.0 - SHIP_FRICTION)).abs() < 1e-6);
    }

    #[test]
    fn test_shot_spawns_missile() {
        let mut state = GameState::new(1);
        let fire = TickInput {
            shots: 1,
            ..Default::default()
        };
        tick(&mut state, &fire);
        assert_eq!(state.missiles.len(), 1);
        assert_eq!(state.drain_events(), vec![GameEvent::MissileFired]);
    }

    #[test]
    fn test_missiles_expire() {
        let mut state = GameState::new(1);
        state.missiles.insert(missile_at(Vec2::new(10.0, 10.0)));
        for _ in 0..49 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.missiles.len(), 1);
        tick(&mut state, &TickInput::default());
        assert!(state.missiles.is_empty());
    }

    #[test]
    fn test_double_hit_scores_two() {
        let mut state = GameState::new(1);
        state.start();
        state.rocks.insert(rock_at(Vec2::new(100.0, 100.0)));
        let untouched = state.rocks.insert(rock_at(Vec2::new(700.0, 100.0)));
        state.missiles.insert(missile_at(Vec2::new(110.0, 100.0)));
        state.missiles.insert(missile_at(Vec2::new(90.0, 100.0)));
        let stray = state.missiles.insert(missile_at(Vec2::new(100.0, 500.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.session.score, 2);
        assert_eq!(state.rocks.len(), 1);
        assert!(state.rocks.contains(untouched));
        assert_eq!(state.missiles.len(), 1);
        assert!(state.missiles.contains(stray));
    }

    #[test]
    fn test_ship_hits_cost_lives() {
        let mut state = GameState::new(1);
        state.start();
        state.rocks.insert(rock_at(Vec2::new(400.0, 300.0)));
        state.rocks.insert(rock_at(Vec2::new(420.0, 300.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.session.lives, 1);
        assert!(state.rocks.is_empty());
        assert_eq!(state.session.phase, Phase::Playing);
    }

    #[test]
    fn test_game_over_resets() {
        let mut state = GameState::new(1);
        state.start();
        state.session.high_score = 3;
        state.session.score = 7;
        let far = Vec2::new(50.0, 50.0);

        for _ in 0..3 {
            state.rocks.insert(rock_at(far));
            state.rocks.insert(rock_at(state.ship.body.pos));
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.session.phase, Phase::Splash);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.high_score, 7);
        assert!(state.rocks.is_empty());
        assert!(state.drain_events().contains(&GameEvent::GameOver {
            score: 7,
            high_score: 7
        }));
    }

    #[test]
    fn test_simultaneous_hits_past_zero() {
        let mut state = GameState::new(1);
        state.start();
        state.session.lives = 1;
        for _ in 0..3 {
            state.rocks.insert(rock_at(state.ship.body.pos));
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.session.phase, Phase::Splash);
        assert_eq!(state.session.lives, 3);
    }

    #[test]
    fn test_world_keeps_moving_in_splash() {
        let mut state = GameState::new(1);
        let handle = state.rocks.insert(Sprite::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            0.0,
            0.0,
            ImageId::Asteroid,
        ));
        tick(&mut state, &TickInput::default());
        let pos = state.rocks.get(handle).map(|r| r.body.pos);
        assert_eq!(pos, Some(Vec2::new(101.0, 100.0)));
        assert!((state.session.time - (START_TIME + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_clock_advances_past_f32_precision() {
        let mut state = GameState::new(1);
        state.session.time = 16_777_216.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.session.time, 16_777_217.0);
    }

    #[test]
    fn test_determinism() {
        use crate::sim::spawner::spawn_rock;

        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let inputs = [
            click(400.0, 300.0),
            TickInput {
                thrust: true,
                turn: Turn::Left,
                shots: 1,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for frame in 0..300 {
            let input = &inputs[frame % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
            if frame % 60 == 0 {
                spawn_rock(&mut state1);
                spawn_rock(&mut state2);
            }
        }

        assert_eq!(state1.rocks.len(), state2.rocks.len());
        assert_eq!(state1.session.score, state2.session.score);
        assert_eq!(state1.ship.body.pos, state2.ship.body.pos);
    }
}
