#![allow(dead_code)]

use std::ops::Add;
use rapier3d::na;
use rapier3d::prelude::Real;

// Type defs for convenience
// Makes it easier to switch the maths library

// Float specializations
pub type Vec2f = na::Vector2<f32>;
pub type Vec3f = na::Vector3<f32>;
pub type Vec4f = na::Vector4<f32>;
pub type Point3f = na::Point3<f32>;
pub type Mat3f = na::Matrix3<f32>;
pub type Mat4f = na::Matrix4<f32>;
pub type Quatf = na::Quaternion<f32>;
pub type UnitQuatf = na::UnitQuaternion<f32>;
pub type UnitVec3f = na::UnitVector3<f32>;

// Generic
pub type Vec2<T> = na::Vector2<T>;
pub type Vec3<T> = na::Vector3<T>;
pub type Point3<T> = na::Point3<T>;
pub type Mat3<T> = na::Matrix3<T>;
pub type Mat4<T> = na::Matrix4<T>;
pub type Quat<T> = na::Quaternion<T>;
pub type UnitQuat<T> = na::UnitQuaternion<T>;
pub type UnitVec3<T> = na::UnitVector3<T>;

// Flips view-space Z so that "ahead of the viewer" is +Z, which is
// what the heading indicator expects. Our cameras look down -Z.
pub fn forward_z_flip() -> Mat4f {
    Mat4::new_nonuniform_scaling(&Vec3f::new(1.0, 1.0, -1.0))
}

pub fn to_point(v3: Vec3f) -> Point3<Real> {
    Point3::origin().add(v3)
}

/// RGB color with components in `[0, 1]`.
pub type Color3 = Vec3f;

/// Euler angles in radians as scene layouts author them: yaw about Y,
/// pitch about X, then roll about Z, i.e. `Ry * Rx * Rz`.
pub fn rotation_from_euler(euler: Vec3f) -> UnitQuatf {
    UnitQuat::from_axis_angle(&Vec3::y_axis(), euler.y)
        * UnitQuat::from_axis_angle(&Vec3::x_axis(), euler.x)
        * UnitQuat::from_axis_angle(&Vec3::z_axis(), euler.z)
}
