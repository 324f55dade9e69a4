//! Eased reorientation between two face frames.
//!
//! Body rotation is slerped between the start and target quaternions; the
//! camera's up vector is lerped (not slerped) between the old and new face
//! normals. Both follow the same cubic ease-out curve.

use glam::{Quat, Vec3};

/// One frame of an in-flight reorientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolatedPose {
    /// Linear progress in `[0, 1]`.
    pub progress: f32,
    /// `progress` after easing.
    pub eased: f32,
    /// Body rotation for this frame.
    pub rotation: Quat,
    /// Camera up vector for this frame. Not renormalized.
    pub camera_up: Vec3,
}

/// Cubic ease-out: `1 - (1 - p)³`. Fast start, slow finish.
///
/// Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Linear progress of `elapsed_ms` through `duration_ms`, clamped to `[0, 1]`.
///
/// A zero duration is already complete.
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f32 / duration_ms as f32).min(1.0)
}

/// Minimal rotation taking unit vector `from` onto unit vector `to`.
///
/// Antiparallel inputs rotate half a turn about an arbitrary perpendicular axis.
pub fn shortest_arc(from: Vec3, to: Vec3) -> Quat {
    Quat::from_rotation_arc(from, to)
}

/// Sample the reorientation at `elapsed_ms` into a `duration_ms` window.
///
/// Progress 0 yields exactly `start`/`start_up`; progress 1 yields exactly
/// `target`/`target_up`.
pub fn interpolate(
    start: Quat,
    target: Quat,
    start_up: Vec3,
    target_up: Vec3,
    elapsed_ms: u64,
    duration_ms: u64,
) -> InterpolatedPose {
    let progress = progress(elapsed_ms, duration_ms);
    let eased = ease_out_cubic(progress);

    let (rotation, camera_up) = if eased <= 0.0 {
        (start, start_up)
    } else if eased >= 1.0 {
        (target, target_up)
    } else {
        (start.slerp(target, eased), start_up.lerp(target_up, eased))
    };

    InterpolatedPose {
        progress,
        eased,
        rotation,
        camera_up,
    }
}
