//! Host-facing game driver
//!
//! The host forwards raw input and calls `update` with the wall-clock time
//! since the previous call. Two independent timers run off that delta: the
//! fixed-rate frame tick and the 1000 ms rock spawner.

use glam::Vec2;

use crate::audio::{AudioManager, AudioSink};
use crate::consts::*;
use crate::input::{InputState, Key};
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameState, spawn_rock, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct App {
    pub state: GameState,
    pub input: InputState,
    pub audio: AudioManager,
    frame_accumulator: f32,
    spawn_accumulator: f32,
}

impl App {
    pub fn new(seed: u64) -> Self {
        log::info!("{TITLE}: {WIDTH}x{HEIGHT} field, seed {seed}");
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            audio: AudioManager::new(),
            frame_accumulator: 0.0,
            spawn_accumulator: 0.0,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn click(&mut self, pos: Vec2) {
        self.input.click(pos);
    }

    /// Run one frame tick and forward its sound cues
    pub fn step<S: AudioSink + ?Sized>(&mut self, sink: &mut S) {
        let input = self.input.take_tick_input();
        tick(&mut self.state, &input);
        let events = self.state.drain_events();
        self.audio.handle_all(&events, sink);
    }

    /// Fire the spawn timer once
    pub fn spawn(&mut self) {
        spawn_rock(&mut self.state);
    }

    /// Advance both timers by `dt` seconds, then draw the latest state.
    /// Returns the number of frame ticks simulated.
    pub fn update<C, S>(&mut self, dt: f32, canvas: &mut C, sink: &mut S) -> u32
    where
        C: Canvas + ?Sized,
        S: AudioSink + ?Sized,
    {
        let dt = dt.clamp(0.0, 0.25);

        self.spawn_accumulator += dt;
        while self.spawn_accumulator >= SPAWN_INTERVAL_SECS {
            self.spawn_accumulator -= SPAWN_INTERVAL_SECS;
            self.spawn();
        }

        self.frame_accumulator += dt;
        let mut substeps = 0;
        while self.frame_accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            self.step(sink);
            self.frame_accumulator -= FRAME_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of catching up forever
            self.frame_accumulator = self.frame_accumulator.min(FRAME_DT);
        }

        draw_frame(&self.state, canvas);
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use crate::renderer::DrawList;
    use crate::sim::Phase;

    #[test]
    fn test_click_to_start_and_spawn_timer() {
        let mut app = App::new(42);
        let mut canvas = DrawList::new();
        let mut sink = NullSink;

        // Spawner is idle on the splash screen
        for _ in 0..120 {
            app.update(1.0 / 60.0, &mut canvas, &mut sink);
        }
        assert!(app.state.rocks.is_empty());

        app.click(Vec2::new(400.0, 300.0));
        app.update(1.0 / 60.0, &mut canvas, &mut sink);
        assert_eq!(app.state.session.phase, Phase::Playing);

        let mut spawned = 0;
        for _ in 0..40 {
            app.spawn();
            spawned = app.state.rocks.len();
        }
        assert!(spawned > 0 && spawned <= MAX_ROCKS);
    }

    #[test]
    fn test_frame_accumulator() {
        let mut app = App::new(1);
        let mut canvas = DrawList::new();
        let mut sink = NullSink;

        assert_eq!(app.update(0.01, &mut canvas, &mut sink), 0);
        assert_eq!(app.update(0.01, &mut canvas, &mut sink), 1);
        // Long stall is capped
        assert_eq!(app.update(10.0, &mut canvas, &mut sink), MAX_SUBSTEPS);
    }

    #[test]
    fn test_spawn_timer_is_wall_clock() {
        let mut app = App::new(3);
        app.state.start();
        let mut canvas = DrawList::new();
        let mut sink = NullSink;

        // 0.9 s of frames: no spawn attempt yet
        for _ in 0..9 {
            app.update(0.1, &mut canvas, &mut sink);
        }
        assert!(app.state.rocks.is_empty());

        // Crossing 1 s fires exactly one attempt; run until one lands
        let mut seconds = 0;
        while app.state.rocks.is_empty() && seconds < 50 {
            for _ in 0..10 {
                app.update(0.1, &mut canvas, &mut sink);
            }
            seconds += 1;
        }
        assert!(!app.state.rocks.is_empty());
    }

    #[test]
    fn test_update_draws_frame() {
        let mut app = App::new(1);
        let mut canvas = DrawList::new();
        app.update(FRAME_DT, &mut canvas, &mut NullSink);
        assert!(canvas.texts().any(|t| t == "Lives: 3"));
    }
}
