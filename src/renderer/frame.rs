//! Per-frame scene drawing
//!
//! Draw order: nebula, scrolling debris, HUD, ship, rocks, missiles, and the
//! splash image last when no game is running.

use glam::Vec2;

use super::canvas::{Canvas, Color};
use crate::assets::ImageId;
use crate::consts::*;
use crate::sim::{GameState, Ship, Sprite};

const HUD_TEXT_SIZE: f32 = 24.0;

/// Horizontal scroll of the debris layer for a frame clock value
#[inline]
pub fn debris_offset(time: f64) -> f32 {
    ((time / DEBRIS_SCROLL_DIVISOR) % f64::from(WIDTH)) as f32
}

pub fn draw_frame<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    draw_background(state.session.time, canvas);
    draw_hud(state, canvas);

    draw_ship(&state.ship, canvas);
    for rock in state.rocks.iter() {
        draw_sprite(rock, canvas);
    }
    for missile in state.missiles.iter() {
        draw_sprite(missile, canvas);
    }

    if !state.session.is_started() {
        let splash = ImageId::Splash.info();
        canvas.draw_image(
            ImageId::Splash,
            splash.center,
            splash.size,
            FIELD / 2.0,
            splash.size,
            0.0,
        );
    }
}

fn draw_background<C: Canvas + ?Sized>(time: f64, canvas: &mut C) {
    let nebula = ImageId::Nebula.info();
    canvas.draw_image(ImageId::Nebula, nebula.center, nebula.size, FIELD / 2.0, FIELD, 0.0);

    let debris = ImageId::Debris.info();
    let offset = debris_offset(time);
    for x in [offset - WIDTH / 2.0, offset + WIDTH / 2.0] {
        canvas.draw_image(
            ImageId::Debris,
            debris.center,
            debris.size,
            Vec2::new(x, HEIGHT / 2.0),
            FIELD,
            0.0,
        );
    }
}

fn draw_hud<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let session = &state.session;
    canvas.draw_text(
        &format!("Lives: {}", session.lives),
        Vec2::new(50.0, 50.0),
        HUD_TEXT_SIZE,
        Color::Red,
    );
    canvas.draw_text(
        &format!("Score: {}", session.score),
        Vec2::new(650.0, 50.0),
        HUD_TEXT_SIZE,
        Color::Red,
    );
    if !session.is_started() {
        canvas.draw_text(
            &format!("High Score: {}", session.high_score),
            Vec2::new(600.0, 100.0),
            HUD_TEXT_SIZE,
            Color::Blue,
        );
    }
}

fn draw_ship<C: Canvas + ?Sized>(ship: &Ship, canvas: &mut C) {
    let size = ImageId::Ship.info().size;
    canvas.draw_image(
        ImageId::Ship,
        ship.image_center(),
        size,
        ship.body.pos,
        size,
        ship.body.angle,
    );
}

fn draw_sprite<C: Canvas + ?Sized>(sprite: &Sprite, canvas: &mut C) {
    let info = sprite.image.info();
    canvas.draw_image(
        sprite.image,
        info.center,
        info.size,
        sprite.body.pos,
        info.size,
        sprite.body.angle,
    );
}
