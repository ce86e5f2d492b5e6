//! Drawing surface contract with the presentation host

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::ImageId;

/// Text colors used by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

/// A fixed-size surface the host can draw images and text onto
pub trait Canvas {
    /// Blit the source rect (`source_center`, `source_size`) of `image` to
    /// `dest_center` scaled to `dest_size`, rotated by `rotation` radians
    fn draw_image(
        &mut self,
        image: ImageId,
        source_center: Vec2,
        source_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
        rotation: f32,
    );

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Image {
        image: ImageId,
        source_center: Vec2,
        source_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
    },
}

/// Canvas that records draw calls for a host to replay
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Image { .. } => None,
        })
    }

    pub fn count_images(&self, id: ImageId) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Image { image, .. } if *image == id))
            .count()
    }
}

impl Canvas for DrawList {
    fn draw_image(
        &mut self,
        image: ImageId,
        source_center: Vec2,
        source_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
        rotation: f32,
    ) {
        self.commands.push(DrawCommand::Image {
            image,
            source_center,
            source_size,
            dest_center,
            dest_size,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}
