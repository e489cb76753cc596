use bevy_ecs::prelude::*;

use crate::components::{ModelSpec, PhysicsBody, PhysicsBodyParams, SceneName, Transform, Visibility};
use crate::config::SceneConfig;
use crate::logging::printlog;
use crate::math::rotation_from_euler;
use crate::physics_world::PhysicsWorld;

/// A static mesh loaded from the scene layout.
#[derive(Component)]
pub struct SceneProp;

/// Surface the teleportation feature may land on.
#[derive(Component)]
pub struct TeleportFloor;

impl SceneProp {
    pub fn spawn_all(
        mut commands: Commands,
        mut physics: ResMut<PhysicsWorld>,
        config: Res<SceneConfig>,
    ) {
        for prop in config.props.iter() {
            let rotation = rotation_from_euler(prop.rotation());
            let transform = Transform::new(prop.position(), rotation, prop.scaling());
            let entity = commands
                .spawn((
                    SceneProp,
                    SceneName::new(prop.name.clone()),
                    ModelSpec::new(prop.model.clone()),
                    transform,
                    Visibility::SHOWN,
                ))
                .id();

            if let Some(half_extents) = prop.pick_half_extents() {
                let body = PhysicsBody::new(
                    entity,
                    PhysicsBodyParams {
                        pos: prop.pick_center(),
                        rotation,
                        half_extents,
                    },
                    &mut physics,
                );
                commands.entity(entity).insert(body);
            }
            if prop.teleport_floor {
                commands.entity(entity).insert(TeleportFloor);
            }
        }
        printlog(&format!("spawned {} scene props", config.props.len()));
    }
}
