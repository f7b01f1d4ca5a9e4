//! Simulation module
//!
//! All gameplay logic lives here. This module must stay side-effect free:
//! - Input arrives as an explicit snapshot
//! - Audio and screen feedback leave as `GameEvent`s
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Landing, crosses_top, find_landing, touches_coin};
pub use level::{COIN_SPAWNS, PLATFORMS, Platform};
pub use state::{Ball, Coin, GameEvent, GameState, RunPhase, TrailPoint};
pub use tick::{TickInput, advance, clamp_dt, tick};
