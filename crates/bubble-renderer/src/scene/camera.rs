//! Fixed perspective camera looking down -Z at the origin.

use crate::sphere::matrix::{self, Mat4};

/// World width the bubble group is scaled against.
pub const GROUP_SCALE_DIVISOR: f32 = 3.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Eye distance from the origin along +Z.
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            distance: 5.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn projection(&self, aspect: f32) -> Mat4 {
        matrix::perspective(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, 0.0, -self.distance)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        matrix::mul(&self.projection(aspect), &self.view())
    }

    /// Height of the view frustum at z = 0, in world units.
    pub fn viewport_height(&self) -> f32 {
        2.0 * self.distance * (self.fov_y_degrees.to_radians() * 0.5).tan()
    }

    /// Width of the view frustum at z = 0, in world units.
    pub fn viewport_width(&self, aspect: f32) -> f32 {
        self.viewport_height() * aspect
    }

    /// Uniform scale applied to the bubble group so it tracks window width.
    pub fn group_scale(&self, aspect: f32) -> f32 {
        self.viewport_width(aspect) / GROUP_SCALE_DIVISOR
    }
}
