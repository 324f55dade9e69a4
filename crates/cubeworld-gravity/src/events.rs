//! Transition lifecycle events for UI and debug consumers.

use cubeworld_faces::CubeFace;
use glam::Vec3;

/// Something observable that happened during a transition.
///
/// Queued by the controller and handed out by
/// [`GravityController::drain_events`](crate::GravityController::drain_events).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionEvent {
    /// A face change was accepted and the reorientation began.
    Started {
        /// Face left behind.
        from: CubeFace,
        /// Face being moved onto.
        to: CubeFace,
        /// Timestamp in milliseconds.
        at: u64,
    },
    /// The body's rotation lock was reinstated.
    RotationLocked {
        /// Timestamp in milliseconds.
        at: u64,
    },
    /// Applied gravity switched.
    GravitySwapped {
        /// Face whose gravity is now applied.
        face: CubeFace,
        /// The new gravity vector.
        gravity: Vec3,
        /// Timestamp in milliseconds.
        at: u64,
    },
    /// The transition finished; detection resumes.
    Completed {
        /// Face the player now stands on.
        face: CubeFace,
        /// Timestamp in milliseconds.
        at: u64,
    },
    /// The transition was cut short.
    Cancelled {
        /// Face the player was moving onto.
        face: CubeFace,
        /// Timestamp in milliseconds.
        at: u64,
    },
}
