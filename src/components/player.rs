use bevy_ecs::prelude::*;

use crate::components::{Camera, Transform};
use crate::config::SceneConfig;
use crate::events::CameraSetEvent;
use crate::logging::printlog;

/// The viewer. Exactly one exists per scene.
#[derive(Component)]
pub struct Player;

impl Player {
    pub fn spawn(mut commands: Commands, config: Res<SceneConfig>) {
        let cam = &config.camera;
        let camera = Camera::new(cam.aspect, cam.fov_degrees.to_radians(), cam.znear, cam.zfar);
        let mut transform = Transform::from_position(cam.position());
        transform.look_at(cam.target());
        commands.spawn((Player, camera, transform));
        printlog("spawned player camera");
    }

    /// Follows the head pose reported by the XR device.
    pub fn update_player_view_xr(
        mut player: Query<(&mut Camera, &mut Transform), With<Player>>,
        mut events: EventReader<CameraSetEvent>,
    ) {
        let Ok((mut camera, mut transform)) = player.get_single_mut() else {
            return;
        };
        // Only the latest pose matters.
        if let Some(event) = events.iter().last() {
            transform.set_pose(event.pos, event.rot);
            if let Some(projection) = event.projection_matrix {
                camera.set_projection_matrix(projection);
            }
        }
    }
}
