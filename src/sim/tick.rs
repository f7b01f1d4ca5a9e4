//! Variable-timestep simulation step
//!
//! One call per animation frame. The step reads an immutable input snapshot
//! and reports what happened as events; it never touches audio or the screen.

use super::collision::{find_landing, touches_coin};
use super::level::PLATFORMS;
use super::state::{GameEvent, GameState, RunPhase, TrailPoint};
use crate::consts::*;
use crate::smoothing_factor;

/// Input snapshot for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Roll left held
    pub left: bool,
    /// Roll right held
    pub right: bool,
    /// Jump key held (releasing early cuts the jump short)
    pub jump_held: bool,
    /// Jump was pressed since the last step (arms the jump buffer)
    pub jump_pressed: bool,
}

impl TickInput {
    /// Horizontal intent: -1, 0 or 1
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Clamp a host frame delta into the range the integrator tolerates
#[inline]
pub fn clamp_dt(elapsed: f32) -> f32 {
    if elapsed.is_finite() {
        elapsed.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Pure transition: the state after one step, plus the step's events
pub fn advance(state: &GameState, input: &TickInput, elapsed: f32) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let events = tick(&mut next, input, elapsed);
    (next, events)
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != RunPhase::Running {
        return events;
    }

    let dt = clamp_dt(elapsed);
    let fall_line = state.fall_line();
    let tuning = &state.tuning;
    let ball = &mut state.ball;

    // Grace timers
    state.coyote_timer = (state.coyote_timer - dt).max(0.0);
    state.jump_buffer = (state.jump_buffer - dt).max(0.0);
    if input.jump_pressed {
        state.jump_buffer = tuning.jump_buffer_secs;
    }

    // Horizontal control
    let direction = input.direction();
    let was_grounded = state.grounded;
    if !was_grounded && direction == 0.0 {
        ball.vel.x *= (-tuning.air_drag * dt).exp();
    } else {
        let desired = direction * tuning.ramped_max_speed(state.elapsed);
        let mut response = tuning.ground_response;
        if desired != 0.0 && ball.vel.x != 0.0 && desired.signum() != ball.vel.x.signum() {
            response *= tuning.brake_multiplier;
        }
        if !was_grounded {
            response *= tuning.air_multiplier;
        }
        ball.vel.x += (desired - ball.vel.x) * smoothing_factor(response, dt);
    }

    // Integrate
    let gravity = if ball.vel.y < 0.0 && !input.jump_held {
        tuning.gravity * tuning.jump_cut_multiplier
    } else {
        tuning.gravity
    };
    ball.vel.y += gravity * dt;
    let prev_y = ball.pos.y;
    let dx = ball.vel.x * dt;
    ball.pos.x += dx;
    ball.pos.y += ball.vel.y * dt;
    ball.rotation += dx / ball.radius;

    // Landing
    state.grounded = false;
    if let Some(landing) = find_landing(
        &PLATFORMS,
        ball.pos.x,
        prev_y,
        ball.pos.y,
        ball.vel.y,
        ball.radius,
    ) {
        ball.pos.y = landing.rest_y;
        ball.vel.y = 0.0;
        state.grounded = true;
    }

    // Jump
    if state.grounded {
        state.coyote_timer = tuning.coyote_secs;
    }
    if state.jump_buffer > 0.0 && state.coyote_timer > 0.0 {
        ball.vel.y = -tuning.jump_force;
        state.jump_buffer = 0.0;
        state.coyote_timer = 0.0;
        state.grounded = false;
        events.push(GameEvent::Jumped);
    }

    // Limits
    ball.vel.x = ball.vel.x.clamp(-tuning.max_speed, tuning.max_speed);
    if ball.pos.x < ball.radius {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.max(0.0);
    }

    // Fall line
    if ball.pos.y - ball.radius > fall_line {
        state.phase = RunPhase::Lost;
        log::info!(
            "Run lost: distance {:.0}px, {} coins, {:.1}s",
            state.distance,
            state.coins_collected,
            state.elapsed
        );
        events.push(GameEvent::Fell {
            distance: state.distance,
        });
        return events;
    }

    // Coins
    let (ball_pos, ball_radius) = (ball.pos, ball.radius);
    let mut collected = Vec::new();
    state.coins.retain(|coin| {
        let hit = touches_coin(ball_pos, ball_radius, coin.pos, coin.radius);
        if hit {
            collected.push(coin.id);
        }
        !hit
    });
    for id in collected {
        state.coins_collected += 1;
        log::debug!("Coin {} collected ({} total)", id, state.coins_collected);
        events.push(GameEvent::CoinCollected {
            id,
            total: state.coins_collected,
        });
    }

    // Progress
    state.distance = (ball_pos.x - BALL_SPAWN_X).max(0.0);
    state.elapsed += dt;

    // Trail; a zero step would add points that never age
    if dt > 0.0 {
        state.trail.push(TrailPoint::new(ball_pos));
    }
    for point in &mut state.trail {
        point.fade(dt);
    }
    state.trail.retain(TrailPoint::is_visible);

    events
}
