use bevy_ecs::prelude::*;
use log::info;

use crate::components::{ModelSpec, PhysicsBody, PhysicsBodyParams, Player, SceneName, Transform, Visibility};
use crate::config::SceneConfig;
use crate::events::PickEvent;
use crate::interaction::{GuidanceState, Waypoint};
use crate::logging::printlog;
use crate::math::UnitQuatf;
use crate::physics_world::PhysicsWorld;

/// Marks the waypoint with the same index. Only the current one is shown.
#[derive(Component, Debug)]
pub struct Beacon {
    pub waypoint_index: usize,
}

impl Beacon {
    pub fn spawn_route(
        mut commands: Commands,
        mut physics: ResMut<PhysicsWorld>,
        config: Res<SceneConfig>,
        guidance: Res<GuidanceState>,
    ) {
        let guide = &config.guidance;
        for (index, waypoint) in guidance.waypoints().iter().enumerate() {
            let pos = waypoint.to_world(guide.beacon_height);
            let visible = index == guidance.current_waypoint_index();
            let entity = commands
                .spawn((
                    Beacon { waypoint_index: index },
                    SceneName::new(format!("beacon-{}", index)),
                    ModelSpec::new(guide.beacon_model.clone()),
                    Transform::from_position(pos),
                    Visibility::new(visible),
                ))
                .id();
            let body = PhysicsBody::new(
                entity,
                PhysicsBodyParams {
                    pos,
                    rotation: UnitQuatf::identity(),
                    half_extents: guide.beacon_pick_half_extents(),
                },
                &mut physics,
            );
            commands.entity(entity).insert(body);
        }
    }

    /// Re-evaluates the arrival gate from the viewer's ground position.
    pub fn update_arrival(
        player: Query<&Transform, With<Player>>,
        mut guidance: ResMut<GuidanceState>,
    ) {
        let Ok(transform) = player.get_single() else {
            return;
        };
        let was_arrived = guidance.arrived();
        let arrived = guidance.update_arrival(Waypoint::from_world(transform.position()));
        if arrived && !was_arrived {
            info!("arrived at waypoint {}", guidance.current_waypoint_index());
        }
    }

    /// Picking the current beacon while standing at it moves on to the next one.
    pub fn confirm_on_pick(
        mut events: EventReader<PickEvent>,
        mut guidance: ResMut<GuidanceState>,
        mut beacons: Query<(&Beacon, &mut Visibility)>,
    ) {
        for event in events.iter() {
            let Some(picked) = event.picked.filter(|_| event.hit) else {
                continue;
            };
            let Ok((beacon, _)) = beacons.get(picked) else {
                continue;
            };
            if beacon.waypoint_index != guidance.current_waypoint_index() {
                continue;
            }
            let Some((previous, next)) = guidance.confirm_arrival() else {
                continue;
            };
            printlog(&format!("waypoint {} reached, heading to {}", previous, next));
            for (beacon, mut visibility) in beacons.iter_mut() {
                visibility.enabled = beacon.waypoint_index == next;
            }
        }
    }
}
