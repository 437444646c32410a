//! In-memory surface that records every draw call
//!
//! Used by tests and the headless runner to inspect what a frame drew.

use glam::Vec2;

use super::{Color, Surface};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Save,
    Restore,
    Translate {
        x: f32,
        y: f32,
    },
    Rotate(f32),
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    Font(String),
    BeginPath,
    Arc {
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Fill,
    Stroke,
    FillText {
        text: String,
        x: f32,
        y: f32,
    },
}

/// A filled arc resolved to surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything drawn so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text drawn, in order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of stroke calls
    pub fn strokes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Replay the commands and return every filled arc with its final
    /// position, honoring translate/rotate and save/restore.
    pub fn filled_circles(&self) -> Vec<FilledCircle> {
        #[derive(Clone, Copy)]
        struct Transform {
            offset: Vec2,
            rotation: f32,
        }

        impl Transform {
            fn apply(&self, p: Vec2) -> Vec2 {
                self.offset + Vec2::from_angle(self.rotation).rotate(p)
            }
        }

        let mut current = Transform {
            offset: Vec2::ZERO,
            rotation: 0.0,
        };
        let mut fill = Color::rgb(0, 0, 0);
        let mut stack = Vec::new();
        let mut path: Vec<(Vec2, f32)> = Vec::new();
        let mut circles = Vec::new();

        for command in &self.commands {
            match command {
                DrawCommand::Save => stack.push((current, fill)),
                DrawCommand::Restore => {
                    if let Some((t, f)) = stack.pop() {
                        current = t;
                        fill = f;
                    }
                }
                DrawCommand::Translate { x, y } => {
                    current.offset = current.apply(Vec2::new(*x, *y));
                }
                DrawCommand::Rotate(angle) => current.rotation += angle,
                DrawCommand::FillColor(color) => fill = *color,
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::Arc { x, y, radius, .. } => {
                    path.push((current.apply(Vec2::new(*x, *y)), *radius));
                }
                DrawCommand::Fill => {
                    circles.extend(path.iter().map(|&(center, radius)| FilledCircle {
                        center,
                        radius,
                        color: fill,
                    }));
                }
                _ => {}
            }
        }

        circles
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
