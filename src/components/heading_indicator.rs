use bevy_ecs::prelude::*;

use crate::components::{Camera, ModelSpec, Player, SceneName, Transform};
use crate::config::SceneConfig;
use crate::interaction::{indicator_yaw, GuidanceState};
use crate::math::{UnitQuat, Vec3, Vec3f};

/// Arrow kept in front of the viewer, turned towards the current waypoint.
#[derive(Component, Debug)]
pub struct HeadingIndicator {
    /// Last yaw applied, in radians.
    pub yaw: f32,
    offset: Vec3f,
}

impl HeadingIndicator {
    pub fn spawn(mut commands: Commands, config: Res<SceneConfig>) {
        commands.spawn((
            HeadingIndicator {
                yaw: 0.0,
                offset: config.guidance.indicator_offset(),
            },
            SceneName::new("heading-indicator"),
            ModelSpec::new(config.guidance.indicator_model.clone()),
            Transform::default(),
        ));
    }

    pub fn update(
        player: Query<(&Camera, &Transform), (With<Player>, Without<HeadingIndicator>)>,
        mut indicators: Query<(&mut HeadingIndicator, &mut Transform)>,
        guidance: Res<GuidanceState>,
    ) {
        let Ok((camera, viewer)) = player.get_single() else {
            return;
        };
        let view = camera.heading_view_matrix(viewer);
        let yaw = indicator_yaw(&view, guidance.current_waypoint());
        for (mut indicator, mut transform) in indicators.iter_mut() {
            indicator.yaw = yaw;
            let pos = viewer.position() + viewer.rotation() * indicator.offset;
            let rot = viewer.rotation() * UnitQuat::from_axis_angle(&Vec3::y_axis(), yaw);
            transform.set_pose(pos, rot);
        }
    }
}
