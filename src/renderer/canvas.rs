//! Browser canvas backend

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface};

/// [`Surface`] over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

/// Canvas calls only fail on invalid arguments; report and keep drawing
fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        report("translate", self.ctx.translate(x as f64, y as f64));
    }

    fn rotate(&mut self, angle: f32) {
        report("rotate", self.ctx.rotate(angle as f64));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        report(
            "arc",
            self.ctx.arc(
                x as f64,
                y as f64,
                radius as f64,
                start_angle as f64,
                end_angle as f64,
            ),
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        report("fill_text", self.ctx.fill_text(text, x as f64, y as f64));
    }
}
