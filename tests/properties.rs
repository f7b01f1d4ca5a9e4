//! Simulation invariants over arbitrary input sequences

use proptest::prelude::*;

use rolling_balance::consts::*;
use rolling_balance::sim::{GameEvent, GameState, PLATFORMS, RunPhase, TickInput, tick};

fn arb_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, jump_held, jump_pressed)| TickInput {
            left,
            right,
            jump_held,
            jump_pressed,
        },
    )
}

/// Frame deltas including junk the host might hand us
fn arb_dt() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => 0.0f32..0.05,
        1 => Just(-1.0f32),
        1 => Just(10.0f32),
        1 => Just(f32::NAN),
    ]
}

fn arb_frames() -> impl Strategy<Value = Vec<(TickInput, f32)>> {
    prop::collection::vec((arb_input(), arb_dt()), 1..400)
}

fn running() -> GameState {
    let mut state = GameState::default();
    state.start();
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ball_stays_right_of_wall_and_under_speed_cap(frames in arb_frames()) {
        let mut state = running();
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            prop_assert!(state.ball.pos.x >= state.ball.radius);
            prop_assert!(state.ball.vel.x.abs() <= state.tuning.max_speed);
            prop_assert!(state.ball.pos.is_finite());
        }
    }

    #[test]
    fn trail_never_holds_faded_points(frames in arb_frames()) {
        let mut state = running();
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            prop_assert!(state.trail.iter().all(|p| p.opacity > TRAIL_MIN_OPACITY));
        }
    }

    #[test]
    fn coins_only_disappear_and_count_only_grows(frames in arb_frames()) {
        let mut state = running();
        let mut seen_collected = Vec::new();
        let mut last_count = 0;
        for (input, dt) in &frames {
            let coins_before = state.coins.len();
            let events = tick(&mut state, input, *dt);
            prop_assert!(state.coins.len() <= coins_before);
            prop_assert!(state.coins_collected >= last_count);
            last_count = state.coins_collected;

            for event in &events {
                if let GameEvent::CoinCollected { id, .. } = event {
                    prop_assert!(!seen_collected.contains(id));
                    seen_collected.push(*id);
                }
            }
            for id in &seen_collected {
                prop_assert!(state.coins.iter().all(|c| c.id != *id));
            }
            prop_assert_eq!(
                state.coins.len() + state.coins_collected as usize,
                rolling_balance::sim::COIN_SPAWNS.len()
            );
        }
    }

    #[test]
    fn landings_only_happen_while_descending(frames in arb_frames()) {
        let mut state = running();
        for (input, dt) in &frames {
            let prev_bottom = state.ball.bottom();
            tick(&mut state, input, *dt);
            if state.grounded {
                // It came from at or above the surface it now rests on
                prop_assert!(prev_bottom <= state.ball.bottom() + 2.0 * LANDING_EPSILON);
                prop_assert_eq!(state.ball.vel.y, 0.0);
            }
        }
    }

    #[test]
    fn lost_is_terminal_until_restart(frames in arb_frames()) {
        let mut state = running();
        state.ball.pos.x = 450.0; // over the first gap
        state.ball.vel.x = 0.0;
        for (input, dt) in &frames {
            let phase_before = state.phase;
            let distance = state.distance;
            tick(&mut state, input, *dt);
            if phase_before == RunPhase::Lost {
                prop_assert_eq!(state.phase, RunPhase::Lost);
                prop_assert_eq!(state.distance, distance);
            }
        }
        state.restart();
        prop_assert_eq!(state.phase, RunPhase::Running);
        prop_assert_eq!(state.distance, 0.0);
        prop_assert_eq!(state.elapsed, 0.0);
        prop_assert_eq!(state.coins_collected, 0);
    }

    #[test]
    fn elapsed_advances_by_clamped_dt(dt in arb_dt()) {
        let mut state = running();
        tick(&mut state, &TickInput::default(), dt);
        prop_assert!(state.elapsed >= 0.0 && state.elapsed <= MAX_FRAME_DT);
    }
}

#[test]
fn scenario_rest_on_first_platform() {
    let mut state = running();
    state.ball.pos.x = 90.0;
    state.ball.pos.y = 460.0 - state.ball.radius;
    state.ball.vel = glam::Vec2::ZERO;
    tick(&mut state, &TickInput::default(), 0.016);
    assert_eq!(state.ball.pos.y, 460.0 - state.ball.radius);
    assert_eq!(state.ball.vel.y, 0.0);
}

#[test]
fn scenario_fall_through_gap() {
    let mut state = running();
    state.ball.pos = glam::Vec2::new(450.0, 200.0);
    state.ball.vel = glam::Vec2::ZERO;
    let mut frames = 0;
    while state.phase == RunPhase::Running && frames < 1000 {
        tick(&mut state, &TickInput::default(), 0.016);
        frames += 1;
    }
    assert_eq!(state.phase, RunPhase::Lost);
    assert!(state.ball.pos.y - state.ball.radius > CANVAS_HEIGHT + FALL_MARGIN);
}

#[test]
fn scenario_rising_ball_passes_through_platform() {
    let top = PLATFORMS[1].top();
    let mut state = running();
    // Under the second platform, moving up fast
    state.ball.pos = glam::Vec2::new(560.0, top + 30.0);
    state.ball.vel = glam::Vec2::new(0.0, -700.0);

    let mut cleared_top = false;
    for _ in 0..200 {
        tick(&mut state, &TickInput::default(), 0.016);
        if state.ball.vel.y < 0.0 {
            assert!(!state.grounded);
        }
        if state.ball.bottom() < top {
            cleared_top = true;
        }
        if state.grounded {
            break;
        }
    }
    assert!(cleared_top);
    assert!(state.grounded);
    assert_eq!(state.ball.pos.y, top - state.ball.radius);
}
