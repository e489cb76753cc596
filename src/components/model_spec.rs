use bevy_ecs::prelude::*;


/// Which model the renderer should draw for this entity.
#[derive(Component, Debug, Clone)]
pub struct ModelSpec {
    pub modelname: String
}

impl ModelSpec {
    pub fn new(modelname: impl Into<String>) -> ModelSpec {
        Self {
            modelname: modelname.into()
        }
    }
}
