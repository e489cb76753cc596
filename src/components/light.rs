use bevy_ecs::prelude::*;

use crate::config::SceneConfig;
use crate::math::{Color3, Vec3f};


/// Ambient light from a sky direction, ground gets the complement.
#[derive(Debug,Component)]
pub struct HemisphericLight {
    pub direction: Vec3f,
    pub diffuse: Color3,
}

impl HemisphericLight {
    pub fn spawn(mut commands: Commands, config: Res<SceneConfig>) {
        commands.spawn(HemisphericLight {
            direction: config.light.direction(),
            diffuse: config.light.diffuse(),
        });
    }
}
