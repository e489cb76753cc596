use bevy_ecs::prelude::*;

/// Human readable scene object name, used by hosts to look entities up.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct SceneName(pub String);

impl SceneName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
