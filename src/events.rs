use bevy_ecs::prelude::*;
use crate::math::{Mat4f, UnitQuatf, Vec3f};

/// Pointer went down (trigger pulled, mouse clicked) along a world-space ray.
#[derive(Event, Debug, Clone)]
pub struct PointerDownEvent {
    pub origin: Vec3f,
    pub direction: Vec3f,
}

/// Result of resolving a pointer-down against the scene.
#[derive(Event, Debug, Clone, Copy)]
pub struct PickEvent {
    pub hit: bool,
    pub picked: Option<Entity>,
}

impl PickEvent {
    pub fn new(picked: Option<Entity>) -> Self {
        Self {
            hit: picked.is_some(),
            picked,
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct ControllerAddedEvent {
    pub unique_id: String,
}

#[derive(Event, Debug, Clone)]
pub struct ControllerRemovedEvent {
    pub unique_id: String,
}

/// Grip pose of a controller in world space.
#[derive(Event, Debug, Clone)]
pub struct ControllerPoseEvent {
    pub unique_id: String,
    pub pos: Vec3f,
    pub rot: UnitQuatf,
}

/// One sample of a controller's squeeze component.
#[derive(Event, Debug, Clone)]
pub struct SqueezeEvent {
    pub unique_id: String,
    pub pressed: bool,
    /// Set only on the sample where `pressed` flipped.
    pub changed: bool,
}

#[derive(Event, Debug, Clone)]
pub struct CameraSetEvent {
    pub pos: Vec3f,
    pub rot: UnitQuatf,
    pub projection_matrix: Option<Mat4f>,
}
