use bevy_ecs::prelude::*;

use crate::config::SceneConfig;


#[derive(Component)]
pub struct Skybox {
    pub texture_name: String,
    pub size: f32,
}

impl Skybox {
    pub fn spawn(mut commands: Commands, config: Res<SceneConfig>) {
        commands.spawn((
            Skybox {
                texture_name: config.skybox.texture.clone(),
                size: config.skybox.size,
            },
        ));
    }
}
