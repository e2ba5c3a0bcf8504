//! Input dispatch table, built once at setup.
//!
//! Replaces callback-per-event plumbing with an explicit mapping from
//! key to action; the window loop translates raw events and looks the
//! action up here.

use winit::keyboard::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePlayback,
    Quit,
}

pub struct KeyBindings {
    bindings: Vec<(KeyCode, Action)>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Space, Action::TogglePlayback),
                (KeyCode::Escape, Action::Quit),
            ],
        }
    }

    pub fn lookup(&self, key: KeyCode) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
