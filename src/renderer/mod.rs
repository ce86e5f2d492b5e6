//! Presentation host contract
//!
//! The host owns the window and decodes images. The game describes each
//! frame as `draw_image` / `draw_text` calls on a `Canvas`.

pub mod canvas;
pub mod frame;

pub use canvas::{Canvas, Color, DrawCommand, DrawList};
pub use frame::{debris_offset, draw_frame};
