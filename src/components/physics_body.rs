use crate::components::Visibility;
use crate::physics_world::{isometry, PhysicsWorld};
use bevy_ecs::prelude::*;
use rapier3d::prelude::*;
use crate::math::{UnitQuatf, Vec3f};

/// Fixed pick box attached to a scene entity.
#[derive(Component)]
pub struct PhysicsBody {
    handle: ColliderHandle,
}

pub struct PhysicsBodyParams {
    pub pos: Vec3f,
    pub rotation: UnitQuatf,
    pub half_extents: Vec3f,
}

impl PhysicsBody {
    pub fn new(owner: Entity, params: PhysicsBodyParams, physics: &mut PhysicsWorld) -> Self {
        let PhysicsBodyParams {
            pos,
            rotation,
            half_extents,
        } = params;

        let body = RigidBodyBuilder::fixed()
            .position(isometry(pos, rotation))
            .build();

        // Mirrored props carry negative scale; extents must stay positive.
        let half_extents = half_extents.abs();
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .user_data(owner.to_bits() as u128)
            .build();
        let (_, handle) = physics.add_body(body, collider);

        Self { handle }
    }

    pub fn collider_handle(&self) -> ColliderHandle {
        self.handle
    }

    /// Hidden objects can't be picked.
    pub fn sync_pickable(
        q: Query<(&PhysicsBody, &Visibility), Changed<Visibility>>,
        mut physics: ResMut<PhysicsWorld>,
    ) {
        for (body, visibility) in q.iter() {
            physics.set_pickable(body.handle, visibility.enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_nearest_box_and_resolves_entity() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let mut physics = PhysicsWorld::new();
        let boxed = |z: f32| PhysicsBodyParams {
            pos: Vec3f::new(0.0, 0.0, z),
            rotation: UnitQuatf::identity(),
            half_extents: Vec3f::from_element(1.0),
        };
        PhysicsBody::new(far, boxed(-20.0), &mut physics);
        PhysicsBody::new(near, boxed(-10.0), &mut physics);
        physics.update_queries();

        let (hit, toi) = physics
            .cast_pick_ray(Vec3f::zeros(), Vec3f::new(0.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(hit, near);
        assert!((toi - 9.0).abs() < 1e-4);
    }

    #[test]
    fn unpickable_boxes_are_skipped() {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        let mut physics = PhysicsWorld::new();
        let body = PhysicsBody::new(
            owner,
            PhysicsBodyParams {
                pos: Vec3f::new(0.0, 0.0, -5.0),
                rotation: UnitQuatf::identity(),
                half_extents: Vec3f::new(1.0, 1.0, -1.0),
            },
            &mut physics,
        );
        physics.update_queries();
        physics.set_pickable(body.collider_handle(), false);
        assert!(physics.cast_pick_ray(Vec3f::zeros(), -Vec3f::z()).is_none());
        physics.set_pickable(body.collider_handle(), true);
        assert!(physics.cast_pick_ray(Vec3f::zeros(), -Vec3f::z()).is_some());
    }

    #[test]
    fn zero_direction_never_hits() {
        let physics = PhysicsWorld::new();
        assert!(physics.cast_pick_ray(Vec3f::zeros(), Vec3f::zeros()).is_none());
    }
}
