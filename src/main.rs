//! Rolling Balance entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rolling_balance::audio::{AudioManager, tones_for};
    use rolling_balance::consts::*;
    use rolling_balance::input::{Action, InputState};
    use rolling_balance::renderer::{CanvasSurface, Viewport, render};
    use rolling_balance::sim::{GameState, RunPhase, tick};
    use rolling_balance::{Settings, Skin, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: InputState,
        surface: CanvasSurface,
        audio: AudioManager,
        last_time: f64,
        /// A frame callback is pending
        loop_armed: bool,
    }

    impl Game {
        fn new(tuning: Tuning, settings: Settings, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::with_settings(tuning, &settings),
                settings,
                input: InputState::new(),
                surface,
                audio: AudioManager::new(),
                last_time: 0.0,
                loop_armed: false,
            }
        }

        /// Apply a key press. Returns true if the frame loop must be re-armed.
        fn key_down(&mut self, action: Action) -> bool {
            self.audio.resume();
            if action.is_held() {
                self.input.press(action);
            }

            let phase_before = self.state.phase;
            match action {
                Action::Jump | Action::Start if self.state.phase == RunPhase::Menu => {
                    self.input.clear();
                    self.state.start();
                }
                Action::Reset => {
                    self.input.clear();
                    self.state.restart();
                }
                Action::Mute => {
                    self.settings.muted = self.state.toggle_mute();
                }
                Action::Skin(slot) => {
                    if let Some(skin) = Skin::from_index(slot) {
                        if self.state.select_skin(skin) {
                            self.settings.skin = skin;
                        }
                    }
                }
                _ => {}
            }

            if self.state.is_running() {
                return self.arm();
            }
            // Nothing animates outside a run; repaint so menu changes show up
            if phase_before != RunPhase::Running {
                self.draw();
            }
            false
        }

        fn key_up(&mut self, action: Action) {
            self.input.release(action);
        }

        fn arm(&mut self) -> bool {
            if self.loop_armed {
                return false;
            }
            self.loop_armed = true;
            self.last_time = 0.0;
            true
        }

        /// One simulation + render pass. Returns true to keep looping.
        fn frame(&mut self, time: f64) -> bool {
            let elapsed = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let input = self.input.snapshot();
            let events = tick(&mut self.state, &input, elapsed);
            for tone in tones_for(&events, self.state.muted) {
                self.audio.play(&tone);
            }
            self.draw();

            if !self.state.is_running() {
                self.loop_armed = false;
            }
            self.loop_armed
        }

        fn draw(&mut self) {
            render(&mut self.surface, &self.state, &self.settings, Viewport::default());
        }
    }

    /// Text content of a configuration element, if present
    fn config_text(document: &web_sys::Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)?
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Rolling Balance starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document - nothing to draw on");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No canvas element - skipping startup");
            return;
        };
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            log::warn!("Canvas has no 2D context - skipping startup");
            return;
        };

        let tuning = Tuning::load_or_default(config_text(&document, "tuning").as_deref());
        let settings = config_text(&document, "settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        let game = Rc::new(RefCell::new(Game::new(tuning, settings, surface)));
        game.borrow_mut().draw();

        setup_input_handlers(game.clone());
        setup_reset_button(game.clone());
        setup_blur_handler(game);

        log::info!("Rolling Balance ready");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(action) = Action::from_code(&event.code()) else {
                    return;
                };
                // Keep Space and arrows from scrolling the page
                if action.is_held() {
                    event.prevent_default();
                }
                let arm = game.borrow_mut().key_down(action);
                if arm {
                    request_animation_frame(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_code(&event.code()) {
                    game.borrow_mut().key_up(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let arm = game.borrow_mut().key_down(Action::Reset);
                if arm {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Drop held keys when the window loses focus so the ball doesn't run away
    fn setup_blur_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().input.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = game.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(game);
        } else {
            log::info!("Frame loop parked");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rolling Balance (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let tuning_json = std::env::args()
        .nth(1)
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                None
            }
        });
    let tuning = rolling_balance::Tuning::load_or_default(tuning_json.as_deref());

    let summary = headless::autopilot_run(tuning);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode run summary: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rolling_balance::audio::tones_for;
    use rolling_balance::consts::BALL_SPAWN_X;
    use rolling_balance::input::{Action, InputState};
    use rolling_balance::renderer::{DisplayList, Viewport, render};
    use rolling_balance::sim::{GameEvent, GameState, PLATFORMS, RunPhase, tick};
    use rolling_balance::{Settings, Tuning};
    use serde::Serialize;

    /// Fixed frame length for the headless run (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after two minutes of simulated time
    const MAX_FRAMES: u32 = 60 * 120;
    /// Jump this far ahead of a platform's right edge
    const JUMP_LEAD: f32 = 40.0;

    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub outcome: &'static str,
        pub distance: f32,
        pub elapsed: f32,
        pub coins: u32,
        pub jumps: u32,
        pub tones: usize,
        pub last_frame_commands: usize,
    }

    /// Roll right, hopping near each platform's edge, until the ball falls
    /// or passes the end of the course
    pub fn autopilot_run(tuning: Tuning) -> RunSummary {
        let settings = Settings::default();
        let mut state = GameState::with_settings(tuning, &settings);
        let mut input = InputState::new();
        state.start();
        input.press(Action::Right);

        let course_end = rolling_balance::sim::level::course_length();
        let mut jumps = 0;
        let mut tones = 0;
        for _ in 0..MAX_FRAMES {
            let near_edge = state.grounded
                && PLATFORMS.iter().any(|p| {
                    p.spans(state.ball.pos.x, 0.0) && p.right() - state.ball.pos.x < JUMP_LEAD
                });
            if near_edge {
                input.press(Action::Jump);
            } else {
                input.release(Action::Jump);
            }

            let events = tick(&mut state, &input.snapshot(), FRAME_DT);
            jumps += events.iter().filter(|e| **e == GameEvent::Jumped).count() as u32;
            tones += tones_for(&events, state.muted).len();

            if state.phase != RunPhase::Running || state.ball.pos.x > course_end {
                break;
            }
        }

        let mut frame = DisplayList::new();
        render(&mut frame, &state, &settings, Viewport::default());

        let outcome = match state.phase {
            RunPhase::Lost => "fell",
            _ if state.ball.pos.x > course_end => "finished",
            _ => "timed out",
        };
        log::info!(
            "Autopilot {} after {:.0}px from x={}",
            outcome,
            state.distance,
            BALL_SPAWN_X
        );

        RunSummary {
            outcome,
            distance: state.distance,
            elapsed: state.elapsed,
            coins: state.coins_collected,
            jumps,
            tones,
            last_frame_commands: frame.commands.len(),
        }
    }
}
