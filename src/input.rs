//! Keyboard input handling
//!
//! Host key events update an `InputState`; the simulation only ever sees the
//! `TickInput` snapshot taken once per frame.

use crate::sim::TickInput;

/// Something a key can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
    Reset,
    Start,
    Mute,
    /// Select skin slot (zero-based)
    Skin(usize),
}

impl Action {
    /// Map a `KeyboardEvent.code` value to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "Space" | "ArrowUp" | "KeyW" => Some(Action::Jump),
            "KeyR" => Some(Action::Reset),
            "Enter" | "NumpadEnter" => Some(Action::Start),
            "KeyM" => Some(Action::Mute),
            "Digit1" => Some(Action::Skin(0)),
            "Digit2" => Some(Action::Skin(1)),
            "Digit3" => Some(Action::Skin(2)),
            "Digit4" => Some(Action::Skin(3)),
            _ => None,
        }
    }

    /// Held actions feed the snapshot; the rest are one-shot commands
    pub fn is_held(&self) -> bool {
        matches!(self, Action::Left | Action::Right | Action::Jump)
    }
}

/// Currently held keys plus the pending jump press
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump_held: bool,
    jump_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat of a held jump key is ignored.
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Left => self.left = true,
            Action::Right => self.right = true,
            Action::Jump => {
                if !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = true;
            }
            _ => {}
        }
    }

    /// Key went up
    pub fn release(&mut self, action: Action) {
        match action {
            Action::Left => self.left = false,
            Action::Right => self.right = false,
            Action::Jump => self.jump_held = false,
            _ => {}
        }
    }

    /// Take this frame's snapshot, consuming the pending jump press
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            jump_held: self.jump_held,
            jump_pressed: self.jump_pressed,
        };
        self.jump_pressed = false;
        input
    }

    /// Drop everything (focus lost, run reset)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_code("KeyA"), Some(Action::Left));
        assert_eq!(Action::from_code("ArrowRight"), Some(Action::Right));
        assert_eq!(Action::from_code("Space"), Some(Action::Jump));
        assert_eq!(Action::from_code("KeyR"), Some(Action::Reset));
        assert_eq!(Action::from_code("Digit3"), Some(Action::Skin(2)));
        assert_eq!(Action::from_code("KeyQ"), None);
        assert!(Action::Jump.is_held());
        assert!(!Action::Reset.is_held());
    }

    #[test]
    fn test_jump_press_is_one_shot() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        let first = input.snapshot();
        assert!(first.jump_pressed && first.jump_held);

        let second = input.snapshot();
        assert!(!second.jump_pressed);
        assert!(second.jump_held);
    }

    #[test]
    fn test_auto_repeat_does_not_rearm_jump() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.snapshot();
        input.press(Action::Jump);
        assert!(!input.snapshot().jump_pressed);

        input.release(Action::Jump);
        input.press(Action::Jump);
        assert!(input.snapshot().jump_pressed);
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut input = InputState::new();
        input.press(Action::Left);
        input.press(Action::Right);
        assert_eq!(input.snapshot().direction(), 0.0);
        input.release(Action::Left);
        assert_eq!(input.snapshot().direction(), 1.0);
        input.clear();
        assert_eq!(input.snapshot(), TickInput::default());
    }
}
