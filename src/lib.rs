//! Asteroids - a wrapped-field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, session state)
//! - `input`: Host key/mouse events folded into a per-frame input snapshot
//! - `renderer`: Draw-command contract with the presentation host
//! - `audio`: Sound cues derived from simulation events
//! - `app`: Frame and spawn timers driving the simulation

pub mod app;
pub mod assets;
pub mod audio;
pub mod input;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use input::{InputState, Key};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window title handed to the presentation host
    pub const TITLE: &str = "Asteroids";

    /// Field dimensions (logical units)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    pub const FIELD: Vec2 = Vec2::new(WIDTH, HEIGHT);

    /// Frame tick (60 Hz redraw)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frames simulated per host update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Rock spawn timer interval, independent of the frame rate
    pub const SPAWN_INTERVAL_SECS: f32 = 1.0;

    /// Session
    pub const STARTING_LIVES: i32 = 3;

    /// Ship physics (per tick)
    pub const SHIP_ACCEL: f32 = 0.1;
    pub const SHIP_FRICTION: f32 = 0.02;
    pub const SHIP_TURN_RATE: f32 = 0.05;
    /// Source-rect x offset of the thrusting frame in the ship sprite sheet
    pub const SHIP_THRUST_FRAME_OFFSET: f32 = 90.0;

    /// Missiles leave the ship's nose at ship velocity + this along the heading
    pub const MISSILE_SPEED: f32 = 4.0;
    pub const MISSILE_NOSE_OFFSET: f32 = 45.0;

    /// Rock spawning
    pub const MAX_ROCKS: usize = 20;
    pub const MIN_SPAWN_DISTANCE: f32 = 100.0;
    pub const ROCK_MAX_SPEED: f32 = 0.3;
    pub const ROCK_MAX_SPIN: f32 = 0.1;

    /// Initial background clock
    pub const START_TIME: f64 = 0.5;
    /// Background debris scrolls at a quarter of the frame clock
    pub const DEBRIS_SCROLL_DIVISOR: f64 = 4.0;
}

/// Unit heading vector for an angle in radians
#[inline]
pub fn angle_to_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn dist(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Wrap a coordinate into [0, size)
#[inline]
pub fn wrap(value: f32, size: f32) -> f32 {
    let wrapped = value.rem_euclid(size);
    // rem_euclid can round up to `size` for tiny negative inputs
    if wrapped >= size { 0.0 } else { wrapped }
}

/// Wrap a point onto the toroidal field
#[inline]
pub fn wrap_to_field(pos: Vec2) -> Vec2 {
    Vec2::new(wrap(pos.x, consts::WIDTH), wrap(pos.y, consts::HEIGHT))
}
