//! `Surface` backed by a browser `CanvasRenderingContext2d`
//!
//! Canvas calls that can throw are ignored; a bad frame is not worth
//! interrupting the loop for.

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Paint, Rect, Surface, TextStyle};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of a canvas, if it has one
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return None,
            Paint::Linear { start, end, stops } => (
                self.ctx.create_linear_gradient(
                    start.x as f64,
                    start.y as f64,
                    end.x as f64,
                    end.y as f64,
                ),
                stops,
            ),
            Paint::Radial {
                inner_center,
                inner_radius,
                outer_center,
                outer_radius,
                stops,
            } => (
                self.ctx
                    .create_radial_gradient(
                        inner_center.x as f64,
                        inner_center.y as f64,
                        *inner_radius as f64,
                        outer_center.x as f64,
                        outer_center.y as f64,
                        *outer_radius as f64,
                    )
                    .ok()?,
                stops,
            ),
        };
        for (offset, color) in stops {
            gradient.add_color_stop(*offset, &color.to_css()).ok();
        }
        Some(gradient)
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            _ => {
                if let Some(gradient) = self.gradient(paint) {
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                }
            }
        }
    }

    fn set_stroke(&self, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
    }

    /// Rounded rectangle path built from arcs, clamping the corner radius
    fn round_rect_path(&self, rect: Rect, radius: f32) {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0) as f64;
        let (x, y) = (rect.x as f64, rect.y as f64);
        let (w, h) = (rect.width as f64, rect.height as f64);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r).ok();
        ctx.arc_to(x + w, y + h, x, y + h, r).ok();
        ctx.arc_to(x, y + h, x, y, r).ok();
        ctx.arc_to(x, y, x + w, y, r).ok();
        ctx.close_path();
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.ctx.translate(offset.x as f64, offset.y as f64).ok();
    }

    fn rotate(&mut self, angle: f32) {
        self.ctx.rotate(angle as f64).ok();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.round_rect_path(rect, radius);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.set_stroke(color, width);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(&style.font());
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
