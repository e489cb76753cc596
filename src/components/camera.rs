use rapier3d::na;
use bevy_ecs::prelude::*;
use crate::math::{Mat4, Mat4f, forward_z_flip};
use crate::components::Transform;


#[derive(Debug,Component)]
pub struct Camera {
    perspective: na::Perspective3<f32>,
}

impl Camera {
    pub fn new(aspect: f32, fovy: f32, znear: f32, zfar: f32) -> Self {
        Self {
            perspective: na::Perspective3::new(aspect, fovy, znear, zfar)
        }
    }

    pub fn view_matrix(&self, transform: &Transform) -> Mat4f {
        // Viewer transforms carry no scale, so this only fails on garbage poses.
        transform.matrix().try_inverse().unwrap_or_else(Mat4::identity)
    }

    /// View matrix with "ahead" on +Z, as consumed by the heading calculator.
    pub fn heading_view_matrix(&self, transform: &Transform) -> Mat4f {
        forward_z_flip() * self.view_matrix(transform)
    }

    pub fn projection_matrix(&self) -> Mat4f {
        *self.perspective.as_matrix()
    }

    // Using in WebXR where the projection matrix is provided directly.
    // rather than decomposed aspect fovy, znear zfar.
    // There's a github discussion about why, but the TLDR is there could
    // potentially be non-standard projection matrices (e.g. with shear),
    // https://github.com/immersive-web/webxr/issues/461
    pub fn set_projection_matrix(&mut self, matrix: Mat4f) {
        self.perspective = na::Perspective3::from_matrix_unchecked(matrix);
    }
}
