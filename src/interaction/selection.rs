use bevy_ecs::prelude::*;

/// Tracks the single scene object that is currently selected for highlighting.
///
/// Objects are compared by entity identity. Picking the selected object again
/// clears the selection.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: Option<Entity>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pick(&mut self, picked: Option<Entity>) {
        let Some(picked) = picked else {
            return;
        };
        if self.selected == Some(picked) {
            self.selected = None;
        } else {
            self.selected = Some(picked);
        }
    }

    pub fn current_selection(&self) -> Option<Entity> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
