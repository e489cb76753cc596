use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ScheduleLabel;
use crate::systems::{
        pick_from_pointer,
        select_picked,
        update_highlight,
        update_pick_queries,
};
use crate::components::{
    Beacon,
    Controller,
    HeadingIndicator,
    HemisphericLight,
    PhysicsBody,
    Player,
    SceneProp,
    Skybox,
};


#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SpawnLabel;

pub fn new_spawn_scene_schedule() -> (Schedule, SpawnLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems(Skybox::spawn.run_if(run_once()))
        .add_systems(HemisphericLight::spawn.run_if(run_once()))
        .add_systems(Player::spawn.run_if(run_once()))
        .add_systems(SceneProp::spawn_all.run_if(run_once()))
        .add_systems(Beacon::spawn_route.run_if(run_once()))
        .add_systems(HeadingIndicator::spawn.run_if(run_once()));
    (schedule, SpawnLabel)
}


#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PreupdateLabel;

pub fn new_preupdate_schedule() -> (Schedule, PreupdateLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems((
            PhysicsBody::sync_pickable,
            update_pick_queries,
        ).chain());
    (schedule, PreupdateLabel)
}


#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UpdateLabel;

pub fn new_update_schedule() -> (Schedule, UpdateLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems(Beacon::update_arrival)
        .add_systems(HeadingIndicator::update.after(Beacon::update_arrival))
        .add_systems(update_highlight);
    (schedule, UpdateLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PointerLabel;

pub fn new_pointer_schedule() -> (Schedule, PointerLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems(PhysicsBody::sync_pickable)
        .add_systems(pick_from_pointer.after(PhysicsBody::sync_pickable))
        .add_systems(select_picked.after(pick_from_pointer))
        .add_systems(Beacon::update_arrival)
        .add_systems(Beacon::confirm_on_pick.after(pick_from_pointer).after(Beacon::update_arrival));
    (schedule, PointerLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ControllerLabel;

pub fn new_controller_schedule() -> (Schedule, ControllerLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems((
            Controller::on_added,
            Controller::on_removed,
            Controller::update_pose,
            Controller::on_squeeze,
        ));
    (schedule, ControllerLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CameraUpdateLabel;

pub fn new_camera_update_schedule() -> (Schedule, CameraUpdateLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems((
            Player::update_player_view_xr,
        ));
    (schedule, CameraUpdateLabel)
}
