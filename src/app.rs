use anyhow::{Context, Result};
use bevy_ecs::event::Event;
use bevy_ecs::prelude::*;
use bevy_hierarchy::Parent;

use crate::components::{Camera, Controller, HeadingIndicator, Player, SceneName, TeleportFloor, Transform, Visibility};
use crate::config::SceneConfig;
use crate::events::{
    CameraSetEvent, ControllerAddedEvent, ControllerPoseEvent, ControllerRemovedEvent, PickEvent,
    PointerDownEvent, SqueezeEvent,
};
use crate::interaction::{GuidanceState, SelectionTracker};
use crate::logging::{init_logging, printlog};
use crate::math::{Color3, Mat4f, UnitQuatf, Vec3f};
use crate::physics_world::PhysicsWorld;
use crate::systems::*;

/// One scene instance. Hosts feed it input through the dispatch methods and
/// call [`App::update_scene`] once per rendered frame.
///
/// Every dispatch method runs its handlers to completion before returning.
pub struct App {
    pub world: World,
}

impl App {
    pub fn new(config: SceneConfig) -> Result<Self> {
        init_logging();
        config.validate().context("invalid scene config")?;

        let mut world = World::default();
        world.init_resource::<Schedules>();

        let guidance = GuidanceState::new(config.guidance.waypoints.clone(), config.guidance.tolerance)
            .context("scene has no waypoints")?;

        world.insert_resource(config);
        world.insert_resource(guidance);
        world.insert_resource(SelectionTracker::new());
        world.insert_resource(HighlightLayer::default());
        world.insert_resource(PhysicsWorld::new());

        // Events
        world.init_resource::<Events<PointerDownEvent>>();
        world.init_resource::<Events<PickEvent>>();
        world.init_resource::<Events<ControllerAddedEvent>>();
        world.init_resource::<Events<ControllerRemovedEvent>>();
        world.init_resource::<Events<ControllerPoseEvent>>();
        world.init_resource::<Events<SqueezeEvent>>();
        world.init_resource::<Events<CameraSetEvent>>();

        // Schedules
        let spawn_scene_schedule = new_spawn_scene_schedule();
        world.add_schedule(spawn_scene_schedule.0, spawn_scene_schedule.1);
        let preupdate_schedule = new_preupdate_schedule();
        world.add_schedule(preupdate_schedule.0, preupdate_schedule.1);
        let update_schedule = new_update_schedule();
        world.add_schedule(update_schedule.0, update_schedule.1);
        let pointer_schedule = new_pointer_schedule();
        world.add_schedule(pointer_schedule.0, pointer_schedule.1);
        let controller_schedule = new_controller_schedule();
        world.add_schedule(controller_schedule.0, controller_schedule.1);
        let camera_update_schedule = new_camera_update_schedule();
        world.add_schedule(camera_update_schedule.0, camera_update_schedule.1);

        world.run_schedule(SpawnLabel);
        world.run_schedule(PreupdateLabel);
        printlog("scene spawned");

        Ok(Self { world })
    }

    /// Scene from `config/scene.toml`, or the built-in layout when the file is missing or bad.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Self::new(SceneConfig::load())
    }

    /// Per-frame polling: arrival gate, heading indicator, highlight.
    pub fn update_scene(&mut self) {
        self.world.run_schedule(PreupdateLabel);
        self.world.run_schedule(UpdateLabel);
        self.update_events();
    }

    pub fn update_camera(&mut self, pos: Vec3f, rot: UnitQuatf, projection_matrix: Option<Mat4f>) {
        self.send(CameraSetEvent {
            pos,
            rot,
            projection_matrix,
        });
        self.world.run_schedule(CameraUpdateLabel);
    }

    pub fn pointer_down(&mut self, origin: Vec3f, direction: Vec3f) {
        self.send(PointerDownEvent { origin, direction });
        self.world.run_schedule(PointerLabel);
    }

    /// Pick resolved by the host's own picking.
    pub fn pick(&mut self, picked: Option<Entity>) {
        self.send(PickEvent::new(picked));
        self.world.run_schedule(PointerLabel);
    }

    pub fn controller_added(&mut self, unique_id: &str) {
        self.send(ControllerAddedEvent {
            unique_id: unique_id.to_string(),
        });
        self.world.run_schedule(ControllerLabel);
    }

    pub fn controller_removed(&mut self, unique_id: &str) {
        self.send(ControllerRemovedEvent {
            unique_id: unique_id.to_string(),
        });
        self.world.run_schedule(ControllerLabel);
    }

    pub fn update_controller_pose(&mut self, unique_id: &str, pos: Vec3f, rot: UnitQuatf) {
        self.send(ControllerPoseEvent {
            unique_id: unique_id.to_string(),
            pos,
            rot,
        });
        self.world.run_schedule(ControllerLabel);
    }

    pub fn squeeze(&mut self, unique_id: &str, pressed: bool, changed: bool) {
        self.send(SqueezeEvent {
            unique_id: unique_id.to_string(),
            pressed,
            changed,
        });
        self.world.run_schedule(ControllerLabel);
    }

    // Queries for the host

    pub fn selection(&self) -> Option<Entity> {
        self.world.resource::<SelectionTracker>().current_selection()
    }

    pub fn highlighted(&self) -> Vec<(Entity, Color3)> {
        self.world.resource::<HighlightLayer>().meshes().to_vec()
    }

    pub fn guidance(&self) -> &GuidanceState {
        self.world.resource::<GuidanceState>()
    }

    /// Projection times view for the player camera.
    pub fn view_projection(&mut self) -> Option<Mat4f> {
        let mut q = self.world.query_filtered::<(&Camera, &Transform), With<Player>>();
        let (camera, transform) = q.get_single(&self.world).ok()?;
        Some(camera.projection_matrix() * camera.view_matrix(transform))
    }

    pub fn indicator_yaw(&mut self) -> Option<f32> {
        let mut q = self.world.query::<&HeadingIndicator>();
        q.get_single(&self.world).ok().map(|indicator| indicator.yaw)
    }

    pub fn find_named(&mut self, name: &str) -> Option<Entity> {
        let mut q = self.world.query::<(Entity, &SceneName)>();
        q.iter(&self.world)
            .find(|(_, n)| n.as_str() == name)
            .map(|(entity, _)| entity)
    }

    pub fn is_visible(&mut self, name: &str) -> Option<bool> {
        let entity = self.find_named(name)?;
        self.world.get::<Visibility>(entity).map(|v| v.enabled)
    }

    pub fn controller(&mut self, unique_id: &str) -> Option<Entity> {
        let mut q = self.world.query::<(Entity, &Controller)>();
        q.iter(&self.world)
            .find(|(_, c)| c.unique_id == unique_id)
            .map(|(entity, _)| entity)
    }

    pub fn teleport_floors(&mut self) -> Vec<Entity> {
        let mut q = self.world.query_filtered::<Entity, With<TeleportFloor>>();
        q.iter(&self.world).collect()
    }

    /// World-space position, following parents up to the root.
    pub fn world_position(&self, entity: Entity) -> Option<Vec3f> {
        let mut m = self.world.get::<Transform>(entity)?.matrix();
        let mut current = entity;
        while let Some(parent) = self.world.get::<Parent>(current) {
            current = parent.get();
            if let Some(transform) = self.world.get::<Transform>(current) {
                m = transform.matrix() * m;
            }
        }
        Some(m.column(3).xyz())
    }

    fn send<E: Event>(&mut self, event: E) {
        self.world.resource_mut::<Events<E>>().send(event);
    }

    fn update_events(&mut self) {
        swap_event_buffers::<PointerDownEvent>(&mut self.world);
        swap_event_buffers::<PickEvent>(&mut self.world);
        swap_event_buffers::<ControllerAddedEvent>(&mut self.world);
        swap_event_buffers::<ControllerRemovedEvent>(&mut self.world);
        swap_event_buffers::<ControllerPoseEvent>(&mut self.world);
        swap_event_buffers::<SqueezeEvent>(&mut self.world);
        swap_event_buffers::<CameraSetEvent>(&mut self.world);
    }
}

// Events older than two frames are dropped.
fn swap_event_buffers<E: Event>(world: &mut World) {
    world.resource_mut::<Events<E>>().update();
}
