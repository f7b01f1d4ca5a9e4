//! Canvas-style rendering module
//!
//! The scene is described through the `Surface` trait, a small subset of the
//! 2D canvas API. `DisplayList` records frames for inspection; on wasm
//! `CanvasSurface` draws straight into a `CanvasRenderingContext2d`.

use glam::Vec2;

pub mod display_list;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use display_list::{DisplayList, DrawCmd};
pub use scene::{SkinPalette, Viewport, camera_offset, render};

/// Font stack for HUD text
pub const FONT_FAMILY: &str = "'Inter', system-ui";

/// 8-bit RGB color with float alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const BLACK: Color = Color::hex(0x000000);

    /// Opaque color from 0xRRGGBB
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Gradient along the segment `start..end`; stops are (offset, color)
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<(f32, Color)>,
    },
    /// Gradient between two concentric-ish circles
    Radial {
        inner_center: Vec2,
        inner_radius: f32,
        outer_center: Vec2,
        outer_radius: f32,
        stops: Vec<(f32, Color)>,
    },
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn font(&self) -> String {
        format!("{}px {}", self.size_px, FONT_FAMILY)
    }
}

/// A 2D drawing surface with a transform stack
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    /// Multiply subsequent fills by `alpha`
    fn set_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}
