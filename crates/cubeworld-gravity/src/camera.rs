//! Camera up-vector handle.
//!
//! During a transition the controller writes the camera's up vector every
//! frame. The render side only needs to expose that vector and a hook to
//! rebuild its projection afterwards.

use glam::Vec3;

/// A camera whose up vector the controller may overwrite.
pub trait UpCamera {
    /// Current up vector.
    fn up(&self) -> Vec3;
    /// Overwrite the up vector.
    fn set_up(&mut self, up: Vec3);
    /// Called after every `set_up`. Renderers that cache a projection or view
    /// matrix rebuild it here.
    fn update_projection_matrix(&mut self) {}
}

/// Minimal camera state: an up vector plus a count of projection rebuilds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedCamera {
    /// Camera up vector. Not necessarily unit length mid-transition.
    pub up: Vec3,
    /// How many times the projection was rebuilt.
    pub projection_updates: u64,
}

impl OrientedCamera {
    /// Camera with the given up vector.
    pub fn new(up: Vec3) -> Self {
        Self {
            up,
            projection_updates: 0,
        }
    }
}

impl Default for OrientedCamera {
    fn default() -> Self {
        Self::new(Vec3::Y)
    }
}

impl UpCamera for OrientedCamera {
    fn up(&self) -> Vec3 {
        self.up
    }

    fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    fn update_projection_matrix(&mut self) {
        self.projection_updates += 1;
    }
}
