//! Rendering module
//!
//! The game draws through a small canvas-2D style [`Surface`] so the same
//! frame code runs against the browser canvas and against an in-memory
//! recorder in tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, FilledCircle, RecordingSurface};
pub use scene::draw_frame;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(255, 165, 0)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    pub const TRAFFIC_TRACK: Color = LIGHT_GRAY;
    pub const PLAYER_TRACK: Color = GRAY;
    pub const PLAYER: Color = RED;
    /// Player color while holding a bonus
    pub const PLAYER_ARMED: Color = ORANGE;
    pub const TRAFFIC: Color = BLACK;
    pub const BONUS: Color = ORANGE;
    pub const TEXT: Color = BLACK;
}

/// Canvas-2D style drawing primitives
///
/// Paths follow canvas semantics: `begin_path` starts a new path, `arc`
/// appends to it, and `fill`/`stroke` paint it with the current style.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Push the current transform and styles
    fn save(&mut self);
    /// Pop to the last `save`
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    /// CSS font shorthand, e.g. `20px Arial`
    fn set_font(&mut self, font: &str);

    fn begin_path(&mut self);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(colors::ORANGE.to_css(), "rgb(255, 165, 0)");
        assert_eq!(colors::BLACK.to_css(), "rgb(0, 0, 0)");
    }
}
