//! Orientation handle over a rigid body.
//!
//! The gravity controller needs only a narrow slice of a rigid body: read and
//! write its rotation, kill its spin, and toggle its rotation lock. This trait
//! is that slice, so the controller never touches Rapier types directly.

use glam::{Quat, Vec3};
use rapier3d::prelude::*;

/// A rigid body whose orientation can be driven directly.
pub trait OrientedBody {
    /// Current world rotation.
    fn rotation(&self) -> Quat;
    /// Overwrite the world rotation, optionally waking the body.
    fn set_rotation(&mut self, rotation: Quat, wake: bool);
    /// Overwrite the angular velocity, optionally waking the body.
    fn set_angular_velocity(&mut self, angular_velocity: Vec3, wake: bool);
    /// Freeze (`true`) or release (`false`) all rotational degrees of freedom.
    fn lock_rotations(&mut self, locked: bool);
    /// Whether all rotational degrees of freedom are frozen.
    fn rotations_locked(&self) -> bool;
}

impl OrientedBody for RigidBody {
    fn rotation(&self) -> Quat {
        // Component-wise so a differing rapier glam version does not matter.
        let r = RigidBody::rotation(self);
        Quat::from_xyzw(r.x, r.y, r.z, r.w)
    }

    fn set_rotation(&mut self, rotation: Quat, wake: bool) {
        let r = rapier3d::math::Rotation::from_xyzw(rotation.x, rotation.y, rotation.z, rotation.w);
        RigidBody::set_rotation(self, r, wake);
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vec3, wake: bool) {
        self.set_angvel(
            Vector::new(angular_velocity.x, angular_velocity.y, angular_velocity.z),
            wake,
        );
    }

    fn lock_rotations(&mut self, locked: bool) {
        RigidBody::lock_rotations(self, locked, true);
    }

    fn rotations_locked(&self) -> bool {
        self.locked_axes().contains(LockedAxes::ROTATION_LOCKED)
    }
}
