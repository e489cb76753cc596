use bevy_ecs::prelude::*;
use bevy_hierarchy::{BuildChildren, Children, DespawnRecursiveExt};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::components::{ModelSpec, SceneName, Transform, Visibility};
use crate::config::{AttachedPropConfig, SceneConfig};
use crate::events::{ControllerAddedEvent, ControllerPoseEvent, ControllerRemovedEvent, SqueezeEvent};
use crate::interaction::{SqueezeToggle, ToggleState};
use crate::logging::printlog;
use crate::math::UnitQuatf;

#[derive(Debug, Component, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Hand {
    Left,
    Right
}

impl Hand {
    /// XR input sources are named like `controller-0-tracked-pointer-right`.
    pub fn from_unique_id(unique_id: &str) -> Option<Hand> {
        if unique_id.ends_with("right") {
            Some(Hand::Right)
        } else if unique_id.ends_with("left") {
            Some(Hand::Left)
        } else {
            None
        }
    }
}

/// Id for an XR input source. Handed controllers keep a stable id while
/// unhanded sources (gaze, transient pointers) are told apart by index.
pub fn input_source_id(hand: Option<Hand>, index: u32) -> String {
    match hand {
        Some(Hand::Left) => "xr-controller-tracked-pointer-left".to_string(),
        Some(Hand::Right) => "xr-controller-tracked-pointer-right".to_string(),
        None => format!("xr-input-{}-none", index),
    }
}

/// A tracked controller. Its transform is the grip pose.
#[derive(Debug, Component)]
pub struct Controller {
    pub unique_id: String,
    pub hand: Option<Hand>,
}

/// A prop parented to a controller grip.
#[derive(Component)]
pub struct AttachedProp;

fn attached_prop_bundle(prop: &AttachedPropConfig, visibility: Visibility) -> (AttachedProp, SceneName, ModelSpec, Transform, Visibility) {
    (
        AttachedProp,
        SceneName::new(prop.name.clone()),
        ModelSpec::new(prop.model.clone()),
        Transform::new(prop.offset(), UnitQuatf::identity(), prop.scaling()),
        visibility,
    )
}

impl Controller {
    pub fn on_added(
        mut commands: Commands,
        config: Res<SceneConfig>,
        mut events: EventReader<ControllerAddedEvent>,
        existing: Query<&Controller>,
    ) {
        for event in events.iter() {
            let id = &event.unique_id;
            if existing.iter().any(|c| &c.unique_id == id) {
                warn!("controller {} added twice, ignoring", id);
                continue;
            }
            printlog(&format!("controller added: {}", id));

            let hand = Hand::from_unique_id(id);
            let props = &config.controllers;
            commands
                .spawn((
                    Controller { unique_id: id.clone(), hand },
                    SceneName::new(format!("controller-{}", id)),
                    Transform::default(),
                ))
                .with_children(|parent| {
                    if hand == Some(props.bat.hand) {
                        parent.spawn(attached_prop_bundle(&props.bat, Visibility::SHOWN));
                    }
                    if hand == Some(props.tablet.hand) {
                        parent.spawn((
                            attached_prop_bundle(&props.tablet, Visibility::HIDDEN),
                            SqueezeToggle::new(),
                        ));
                    }
                });
        }
    }

    pub fn on_removed(
        mut commands: Commands,
        mut events: EventReader<ControllerRemovedEvent>,
        controllers: Query<(Entity, &Controller)>,
    ) {
        for event in events.iter() {
            printlog(&format!("controller removed: {}", event.unique_id));
            match controllers.iter().find(|(_, c)| c.unique_id == event.unique_id) {
                Some((entity, _)) => commands.entity(entity).despawn_recursive(),
                None => warn!("controller {} was never added", event.unique_id),
            }
        }
    }

    pub fn update_pose(
        mut events: EventReader<ControllerPoseEvent>,
        mut controllers: Query<(&Controller, &mut Transform)>,
    ) {
        for event in events.iter() {
            if let Some((_, mut transform)) = controllers
                .iter_mut()
                .find(|(c, _)| c.unique_id == event.unique_id)
            {
                transform.set_pose(event.pos, event.rot);
            }
        }
    }

    /// Drives the squeeze toggle of every prop held by the controller.
    pub fn on_squeeze(
        mut events: EventReader<SqueezeEvent>,
        controllers: Query<(&Controller, &Children)>,
        mut props: Query<(&SceneName, &mut SqueezeToggle, &mut Visibility)>,
    ) {
        for event in events.iter() {
            let Some((_, children)) = controllers
                .iter()
                .find(|(c, _)| c.unique_id == event.unique_id)
            else {
                continue;
            };
            for &child in children.iter() {
                let Ok((name, mut toggle, mut visibility)) = props.get_mut(child) else {
                    continue;
                };
                if let Some(state) = toggle.on_button(event.pressed, event.changed) {
                    visibility.enabled = state == ToggleState::Shown;
                    printlog(&format!("{} {}", name.as_str(), if state.is_shown() { "shown" } else { "hidden" }));
                }
            }
        }
    }
}
