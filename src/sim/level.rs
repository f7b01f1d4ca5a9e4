//! Course geometry
//!
//! Platforms are axis-aligned rectangles in world space (y grows downward).
//! The course is fixed: the same platforms and coins every run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Walkable top surface
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether `x` lies over the platform once its edges are pushed out by `margin`
    #[inline]
    pub fn spans(&self, x: f32, margin: f32) -> bool {
        x >= self.left() - margin && x <= self.right() + margin
    }
}

/// The course, left to right
pub const PLATFORMS: [Platform; 9] = [
    Platform::new(0.0, 460.0, 420.0, 40.0),
    Platform::new(480.0, 400.0, 160.0, 30.0),
    Platform::new(700.0, 340.0, 190.0, 26.0),
    Platform::new(980.0, 420.0, 240.0, 32.0),
    Platform::new(1300.0, 310.0, 160.0, 26.0),
    Platform::new(1560.0, 500.0, 260.0, 36.0),
    Platform::new(1900.0, 380.0, 210.0, 30.0),
    Platform::new(2160.0, 330.0, 220.0, 28.0),
    Platform::new(2460.0, 470.0, 240.0, 36.0),
];

/// Coin spawn points: rolling height over platforms, jump height over gaps
pub const COIN_SPAWNS: [(f32, f32); 12] = [
    (240.0, 432.0),
    (330.0, 432.0),
    (450.0, 360.0),
    (560.0, 372.0),
    (795.0, 312.0),
    (935.0, 290.0),
    (1100.0, 392.0),
    (1380.0, 282.0),
    (1690.0, 472.0),
    (2005.0, 352.0),
    (2270.0, 302.0),
    (2580.0, 442.0),
];

/// Right edge of the last platform
pub fn course_length() -> f32 {
    PLATFORMS
        .iter()
        .map(Platform::right)
        .fold(0.0, f32::max)
}

/// Coin spawn positions as vectors
pub fn coin_positions() -> impl Iterator<Item = Vec2> {
    COIN_SPAWNS.iter().map(|&(x, y)| Vec2::new(x, y))
}
