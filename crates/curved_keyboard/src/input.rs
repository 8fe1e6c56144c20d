use crate::keys::KeyState;

/// Focus and press tracking for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyWidget {
    index: usize,
    state: KeyState,
    armed: bool, // pressed down, waiting for the release
}

impl KeyWidget {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: KeyState::Default,
            armed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn on_focus_enter(&mut self) {
        self.state = KeyState::Focused;
    }

    pub fn on_focus_exit(&mut self) {
        self.state = KeyState::Default;
    }

    pub fn on_press_down(&mut self) {
        self.state = KeyState::Pressed;
        self.armed = true;
    }

    /// Returns `true` if this release completes a tap.
    pub fn on_press_up(&mut self) -> bool {
        self.state = KeyState::Focused;
        std::mem::replace(&mut self.armed, false)
    }
}
