use rapier3d::na;
use bevy_ecs::prelude::*;
use crate::math::{Mat4, Mat4f, Vec3, Vec3f, UnitQuat, UnitQuatf};

/// Pose of an entity relative to its parent (or the world for roots).
#[derive(Component, Debug, Clone, Copy)]
pub struct Transform {
    // Individual components
    pos: Vec3f,
    rot: UnitQuatf,
    scale: Vec3f,
    // Cached transform matrix
    m: Mat4f,
}

impl Transform {
    pub fn new(pos: Vec3f, rot: UnitQuatf, scale: Vec3f) -> Self {
        let m = Mat4::identity();
        let mut res = Self { pos, rot, scale, m };
        res.rebuild_matrix();
        res
    }

    pub fn from_position(pos: Vec3f) -> Self {
        Transform::new(pos, UnitQuat::identity(), Vec3::from_element(1.0))
    }

    // Getters

    pub fn matrix(&self) -> Mat4f {
        self.m
    }

    /// Cameras and viewers look down local -Z.
    pub fn forward(&self) -> Vec3f {
        -(self.rot * Vec3f::z())
    }

    pub fn position(&self) -> Vec3f {
        self.pos
    }

    pub fn rotation(&self) -> UnitQuatf {
        self.rot
    }

    // Setters

    /// Orients local -Z towards `target`, keeping +Y up.
    pub fn look_at(&mut self, target: Vec3f) {
        let dir = self.pos - target;
        if dir.norm_squared() > f32::EPSILON {
            self.rot = UnitQuat::face_towards(&dir, &Vec3::y_axis());
            self.rebuild_matrix();
        }
    }

    pub fn set_pose(&mut self, pos: Vec3f, rot: UnitQuatf) {
        self.pos = pos;
        self.rot = rot;
        self.rebuild_matrix();
    }

    fn rebuild_matrix(&mut self) {
        let rot_m = na::Rotation3::from(self.rot);
        let tr_m = na::Translation3::new(self.pos.x, self.pos.y, self.pos.z);
        let rot_and_tr_m = tr_m * rot_m;
        self.m = rot_and_tr_m
            .to_matrix()
            .prepend_nonuniform_scaling(&self.scale);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(Vec3::new(0.0, 0.0, 0.0), UnitQuat::identity(), Vec3::from_element(1.0))
    }
}
