use std::collections::HashSet;

use bevy_ecs::prelude::*;
use rapier3d::na;
use rapier3d::prelude::*;

use crate::math::{to_point, UnitQuatf, Vec3f};

/// How far a pointer ray reaches, in world units.
pub const MAX_PICK_DISTANCE: Real = 1000.0;

/// Static collision shapes used for pointer picking.
///
/// Every collider carries the bits of the entity it belongs to in
/// `user_data`, so a ray hit resolves straight back to a scene object.
#[derive(Resource)]
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    query_pipeline: QueryPipeline,
    unpickable: HashSet<ColliderHandle>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            unpickable: HashSet::new(),
        }
    }

    pub fn add_body(&mut self, body: RigidBody, collider: Collider) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.bodies.insert(body);
        let collider_handle = self.colliders.insert_with_parent(collider, body_handle, &mut self.bodies);
        (body_handle, collider_handle)
    }

    pub fn set_pickable(&mut self, handle: ColliderHandle, pickable: bool) {
        if pickable {
            self.unpickable.remove(&handle);
        } else {
            self.unpickable.insert(handle);
        }
    }

    pub fn is_pickable(&self, handle: ColliderHandle) -> bool {
        !self.unpickable.contains(&handle)
    }

    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.bodies, &self.colliders);
    }

    /// Nearest pickable entity along the ray, with the hit distance.
    pub fn cast_pick_ray(&self, origin: Vec3f, direction: Vec3f) -> Option<(Entity, Real)> {
        let dir = direction.try_normalize(f32::EPSILON)?;
        let ray = Ray::new(to_point(origin), dir);
        let pickable = |handle: ColliderHandle, _: &Collider| self.is_pickable(handle);
        let filter = QueryFilter::default().predicate(&pickable);
        let (handle, toi) = self.query_pipeline.cast_ray(
            &self.bodies,
            &self.colliders,
            &ray,
            MAX_PICK_DISTANCE,
            true,
            filter,
        )?;
        let collider = self.colliders.get(handle)?;
        Some((Entity::from_bits(collider.user_data as u64), toi))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub fn isometry(pos: Vec3f, rot: UnitQuatf) -> Isometry<Real> {
    na::Isometry3::from_parts(na::Translation3::from(pos), rot)
}
