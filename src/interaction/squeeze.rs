use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Hidden,
    Shown,
}

impl ToggleState {
    pub fn is_shown(self) -> bool {
        self == ToggleState::Shown
    }
}

/// Two-state visibility toggle for a controller-attached prop.
///
/// Only edges count: a sample whose `changed` flag is clear never
/// transitions, so holding the button down does not re-fire.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SqueezeToggle {
    state: ToggleState,
}

impl SqueezeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Feeds one button sample. Returns the new state on a transition.
    pub fn on_button(&mut self, pressed: bool, changed: bool) -> Option<ToggleState> {
        if !changed {
            return None;
        }
        let next = if pressed { ToggleState::Shown } else { ToggleState::Hidden };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}
