//! Recording surface
//!
//! Captures draw calls instead of executing them, so a frame can be inspected
//! without a browser.

use glam::Vec2;

use super::{Color, Paint, Rect, Surface, TextStyle};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { width: f32, height: f32 },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Alpha(f32),
    FillRect { rect: Rect, paint: Paint },
    FillRoundRect { rect: Rect, radius: f32, paint: Paint },
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    StrokeCircle { center: Vec2, radius: f32, color: Color, width: f32 },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// A recorded frame
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any drawn text contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Every `save` has a matching `restore`, never restoring an empty stack
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0i32;
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Save => depth += 1,
                DrawCmd::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    /// Count commands matching a predicate
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|&cmd| pred(cmd)).count()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCmd::Clear { width, height });
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCmd::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCmd::Rotate(angle));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCmd::Alpha(alpha));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCmd::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::FillRoundRect {
            rect,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_check() {
        let mut list = DisplayList::new();
        list.save();
        list.save();
        list.restore();
        assert!(!list.is_balanced());
        list.restore();
        assert!(list.is_balanced());
        list.restore();
        assert!(!list.is_balanced());
    }
}
