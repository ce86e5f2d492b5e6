//! Asteroids entry point
//!
//! There is no windowing host in this crate. The native binary runs a
//! scripted headless session against a recording canvas and prints the
//! final session as JSON.
//!
//! Usage: `asteroids [seed] [--dump-frame]`

use asteroids::audio::NullSink;
use asteroids::consts::*;
use asteroids::renderer::DrawList;
use asteroids::{App, Key};
use glam::Vec2;

/// Length of the scripted session
const DEMO_SECONDS: u32 = 90;

fn main() {
    env_logger::init();

    let mut seed = None;
    let mut dump_frame = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dump-frame" => dump_frame = true,
            other => match other.parse::<u64>() {
                Ok(value) => seed = Some(value),
                Err(_) => log::warn!("Ignoring argument {other:?}"),
            },
        }
    }
    let seed = seed.unwrap_or_else(clock_seed);

    log::info!("Asteroids (native, headless) starting...");
    let mut app = App::new(seed);
    let mut canvas = DrawList::new();
    let mut sink = NullSink;

    // Sit on the splash screen for a moment, then click it
    run_for(&mut app, &mut canvas, &mut sink, 60);
    app.click(FIELD / 2.0);

    let frames = DEMO_SECONDS * 60;
    for frame in 0..frames {
        script_input(&mut app, frame);
        canvas.clear();
        app.update(FRAME_DT, &mut canvas, &mut sink);
    }

    let session = &app.state.session;
    log::info!(
        "Demo finished: score {}, high score {}, lives {}, {} rocks alive",
        session.score,
        session.high_score,
        session.lives,
        app.state.rocks.len()
    );

    match serde_json::to_string_pretty(session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize session: {e}"),
    }
    if dump_frame {
        match serde_json::to_string_pretty(&canvas.commands) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize frame: {e}"),
        }
    }
}

fn run_for(app: &mut App, canvas: &mut DrawList, sink: &mut NullSink, frames: u32) {
    for _ in 0..frames {
        canvas.clear();
        app.update(FRAME_DT, canvas, sink);
    }
}

/// Spin slowly, pulse the engine and fire a few times a second.
/// Clicks the splash again whenever a game ends.
fn script_input(app: &mut App, frame: u32) {
    if !app.state.session.is_started() && frame % 120 == 0 {
        app.click(FIELD / 2.0 + Vec2::new(10.0, 0.0));
    }

    match frame % 240 {
        0 => app.key_down(Key::Right),
        90 => app.key_up(Key::Right),
        120 => app.key_down(Key::Up),
        150 => app.key_up(Key::Up),
        _ => {}
    }

    match frame % 20 {
        0 => app.key_down(Key::Space),
        1 => app.key_up(Key::Space),
        _ => {}
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
