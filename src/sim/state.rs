//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives here; the renderer
//! only ever borrows it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level;
use crate::consts::*;
use crate::settings::{Settings, Skin};
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the player to start
    Menu,
    /// Active gameplay
    Running,
    /// Ball fell off the course
    Lost,
}

/// Something the host may want to react to (audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump impulse applied
    Jumped,
    /// A coin was picked up; `total` is the run's new coin count
    CoinCollected { id: u32, total: u32 },
    /// Ball dropped past the fall line
    Fell { distance: f32 },
}

/// Trail sample for ball rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Seconds since the sample was taken
    pub age: f32,
    pub opacity: f32,
}

impl TrailPoint {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            age: 0.0,
            opacity: 1.0,
        }
    }

    /// Age the sample and recompute its opacity
    pub fn fade(&mut self, dt: f32) {
        self.age += dt;
        self.opacity = (1.0 - self.age * TRAIL_FADE_RATE).max(0.0);
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > TRAIL_MIN_OPACITY
    }
}

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Accumulated roll angle (radians)
    pub rotation: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Ball {
    /// Ball at the start of the course
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::new(BALL_SPAWN_VX, 0.0),
            radius: BALL_RADIUS,
            rotation: 0.0,
        }
    }

    /// Lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: RunPhase,
    pub ball: Ball,
    /// Coins still on the course (collected coins are removed)
    pub coins: Vec<Coin>,
    /// Trail history, oldest first
    pub trail: Vec<TrailPoint>,
    /// Horizontal progress from the spawn point (px)
    pub distance: f32,
    /// Seconds spent in the current run
    pub elapsed: f32,
    pub coins_collected: u32,
    /// Ball rested on a platform during the last step
    pub grounded: bool,
    /// Remaining coyote window (s)
    pub coyote_timer: f32,
    /// Remaining jump buffer window (s)
    pub jump_buffer: f32,
    pub muted: bool,
    pub skin: Skin,
    pub tuning: Tuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh state sitting at the menu
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: RunPhase::Menu,
            ball: Ball::spawn(),
            coins: Self::spawn_coins(),
            trail: Vec::new(),
            distance: 0.0,
            elapsed: 0.0,
            coins_collected: 0,
            grounded: false,
            coyote_timer: 0.0,
            jump_buffer: 0.0,
            muted: false,
            skin: Skin::default(),
            tuning,
        }
    }

    /// Fresh state carrying the player's preferences
    pub fn with_settings(tuning: Tuning, settings: &Settings) -> Self {
        let mut state = Self::new(tuning);
        state.muted = settings.muted;
        state.skin = settings.skin;
        state
    }

    fn spawn_coins() -> Vec<Coin> {
        level::coin_positions()
            .zip(1..)
            .map(|(pos, id)| Coin {
                id,
                pos,
                radius: COIN_RADIUS,
            })
            .collect()
    }

    /// Leave the menu and begin the run. Returns true if the phase changed.
    pub fn start(&mut self) -> bool {
        if self.phase != RunPhase::Menu {
            return false;
        }
        self.phase = RunPhase::Running;
        log::info!("Run started (skin {})", self.skin.as_str());
        true
    }

    /// Reset the run and start rolling again. Preferences and tuning survive.
    pub fn restart(&mut self) {
        let muted = self.muted;
        let skin = self.skin;
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
        self.muted = muted;
        self.skin = skin;
        self.phase = RunPhase::Running;
        log::info!("Run restarted");
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    /// Pick a cosmetic skin (menu only)
    pub fn select_skin(&mut self, skin: Skin) -> bool {
        if self.phase != RunPhase::Menu {
            return false;
        }
        self.skin = skin;
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Y coordinate past which the run is lost
    pub fn fall_line(&self) -> f32 {
        CANVAS_HEIGHT + FALL_MARGIN
    }
}
