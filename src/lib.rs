//! Rolling Balance - a side-scrolling ball-rolling platformer
//!
//! Core modules:
//! - `sim`: Simulation step (kinematics, platform landing, coins, trail)
//! - `renderer`: Canvas-style rendering through the `Surface` trait
//! - `input`: Key mapping and per-tick input snapshots
//! - `audio`: Tone requests for simulation events (Web Audio on wasm)
//! - `settings`: Player preferences
//! - `tuning`: Data-driven physics balance

pub mod audio;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, Skin};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 960.0;
    pub const CANVAS_HEIGHT: f32 = 560.0;

    /// Largest frame delta the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.032;

    /// How far below the canvas the ball may drop before the run is lost
    pub const FALL_MARGIN: f32 = 120.0;

    /// Ball spawn
    pub const BALL_RADIUS: f32 = 18.0;
    pub const BALL_SPAWN_X: f32 = 90.0;
    pub const BALL_SPAWN_Y: f32 = 340.0;
    pub const BALL_SPAWN_VX: f32 = 110.0;

    /// Coins
    pub const COIN_RADIUS: f32 = 10.0;
    /// Pickup distance is shortened by this much so grazes don't count
    pub const COIN_PICKUP_TOLERANCE: f32 = 4.0;

    /// Trail fades at this rate (opacity per second of age)
    pub const TRAIL_FADE_RATE: f32 = 1.5;
    /// Trail samples at or below this opacity are dropped
    pub const TRAIL_MIN_OPACITY: f32 = 0.05;
    pub const TRAIL_DOT_RADIUS: f32 = 10.0;

    /// Camera leads the ball by this fraction of the viewport width
    pub const CAMERA_LEAD: f32 = 0.35;
    pub const CAMERA_MAX: f32 = 9999.0;

    /// Slack for float drift when the ball rests exactly on a platform top
    pub const LANDING_EPSILON: f32 = 1e-3;
}

/// Cubic ease-out on [0, 1]; inputs outside the range are clamped
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Frame-rate independent smoothing factor for a response rate (1/s)
#[inline]
pub fn smoothing_factor(response: f32, dt: f32) -> f32 {
    1.0 - (-response * dt).exp()
}
