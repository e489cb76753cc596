mod highlight;
mod pointer;
mod schedules;

use crate::physics_world::PhysicsWorld;
use bevy_ecs::prelude::*;

pub use highlight::{update_highlight, HighlightLayer};
pub use pointer::{pick_from_pointer, select_picked};
pub use schedules::{
    new_camera_update_schedule, new_controller_schedule, new_pointer_schedule,
    new_preupdate_schedule, new_spawn_scene_schedule, new_update_schedule,
    CameraUpdateLabel, ControllerLabel, PointerLabel, PreupdateLabel, SpawnLabel, UpdateLabel,
};

pub fn update_pick_queries(mut physics: ResMut<PhysicsWorld>) {
    physics.update_queries();
}
