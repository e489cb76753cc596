use bevy_ecs::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub enabled: bool,
}

impl Visibility {
    pub const SHOWN: Visibility = Visibility { enabled: true };
    pub const HIDDEN: Visibility = Visibility { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::SHOWN
    }
}
