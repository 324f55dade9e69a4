//! Per-face orientation frames and gravity vectors.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use crate::CubeFace;

/// Gravity magnitude on every face, in m/s².
pub const GRAVITY_MAGNITUDE: f32 = 9.81;

/// Orientation frame of a single face.
///
/// `up`, `forward`, and `right` form a right-handed orthonormal basis with
/// `forward = up × right`. `baseline_rotation` maps world +Y onto `up`,
/// world +X onto `right`, and world −Z onto `forward`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceOrientation {
    /// Gravity applied while the player stands on this face.
    pub gravity: Vec3,
    /// Outward face normal.
    pub up: Vec3,
    /// Walking "forward" on this face.
    pub forward: Vec3,
    /// Walking "right" on this face.
    pub right: Vec3,
    /// Seed rotation for a body placed fresh on this face.
    ///
    /// Transitions never look this up; they derive the new rotation from the
    /// previous one so a chain of face changes stays continuous.
    pub baseline_rotation: Quat,
}

impl CubeFace {
    /// Orientation frame of this face.
    #[must_use]
    pub fn orientation(self) -> FaceOrientation {
        let (up, right, forward, baseline_rotation) = match self {
            CubeFace::Top => (Vec3::Y, Vec3::X, Vec3::NEG_Z, Quat::IDENTITY),
            CubeFace::Bottom => (Vec3::NEG_Y, Vec3::X, Vec3::Z, Quat::from_rotation_x(PI)),
            CubeFace::Left => (
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Z,
                Quat::from_rotation_z(FRAC_PI_2),
            ),
            CubeFace::Right => (
                Vec3::X,
                Vec3::NEG_Y,
                Vec3::NEG_Z,
                Quat::from_rotation_z(-FRAC_PI_2),
            ),
            CubeFace::Front => (Vec3::Z, Vec3::X, Vec3::Y, Quat::from_rotation_x(FRAC_PI_2)),
            CubeFace::Back => (
                Vec3::NEG_Z,
                Vec3::X,
                Vec3::NEG_Y,
                Quat::from_rotation_x(-FRAC_PI_2),
            ),
        };

        FaceOrientation {
            gravity: up * -GRAVITY_MAGNITUDE,
            up,
            forward,
            right,
            baseline_rotation,
        }
    }

    /// Gravity vector for this face.
    #[must_use]
    pub fn gravity(self) -> Vec3 {
        self.normal() * -GRAVITY_MAGNITUDE
    }
}
