//! Host input folded into a per-frame snapshot
//!
//! The host reports key and mouse events whenever they arrive. They are
//! accumulated here and sampled once per frame, so the simulation never
//! depends on event delivery order within a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{TickInput, Turn};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
}

impl Key {
    /// Map a host key name to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "up" | "arrowup" => Some(Key::Up),
            "space" | " " => Some(Key::Space),
            _ => None,
        }
    }
}

/// Held keys plus one-shot actions since the last frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    space: bool,
    /// Space presses not yet consumed by a frame
    pending_shots: u32,
    /// Last click not yet consumed by a frame
    pending_click: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Up => self.up = true,
            Key::Space => {
                // Ignore host auto-repeat while held
                if !self.space {
                    self.pending_shots += 1;
                }
                self.space = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Up => self.up = false,
            Key::Space => self.space = false,
        }
    }

    /// Key event by host key name; unknown names are ignored
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        match Key::from_name(name) {
            Some(key) if pressed => self.key_down(key),
            Some(key) => self.key_up(key),
            None => log::warn!("Ignoring unmapped key {name:?}"),
        }
    }

    pub fn click(&mut self, pos: Vec2) {
        self.pending_click = Some(pos);
    }

    pub fn turn(&self) -> Turn {
        match (self.left, self.right) {
            (true, false) => Turn::Left,
            (false, true) => Turn::Right,
            _ => Turn::None,
        }
    }

    /// Sample held keys and consume one-shot actions
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            turn: self.turn(),
            thrust: self.up,
            shots: std::mem::take(&mut self.pending_shots),
            click: self.pending_click.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("space"), Some(Key::Space));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_held_keys_persist_one_shots_do_not() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_down(Key::Space);
        input.click(Vec2::new(1.0, 2.0));

        let first = input.take_tick_input();
        assert!(first.thrust);
        assert_eq!(first.shots, 1);
        assert_eq!(first.click, Some(Vec2::new(1.0, 2.0)));

        let second = input.take_tick_input();
        assert!(second.thrust);
        assert_eq!(second.shots, 0);
        assert_eq!(second.click, None);

        input.key_up(Key::Up);
        assert!(!input.take_tick_input().thrust);
    }

    #[test]
    fn test_space_repeat_fires_once() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_down(Key::Space);
        assert_eq!(input.take_tick_input().shots, 1);

        input.key_up(Key::Space);
        input.key_down(Key::Space);
        input.key_up(Key::Space);
        input.key_down(Key::Space);
        assert_eq!(input.take_tick_input().shots, 2);
    }

    #[test]
    fn test_turn_resolution() {
        let mut input = InputState::new();
        assert_eq!(input.turn(), Turn::None);
        input.key_event("left", true);
        assert_eq!(input.turn(), Turn::Left);
        input.key_event("right", true);
        assert_eq!(input.turn(), Turn::None);
        input.key_event("left", false);
        assert_eq!(input.turn(), Turn::Right);
        input.key_event("f13", true);
        assert_eq!(input.turn(), Turn::Right);
    }
}
