//! Error types for the gravity controller.

use cubeworld_faces::CubeFace;

/// Reasons a face transition request was refused.
///
/// A refused request leaves the controller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// A transition is already in flight.
    #[error("a transition to {to} is already in progress")]
    Busy {
        /// Destination of the in-flight transition.
        to: CubeFace,
    },

    /// No player body was supplied.
    #[error("no player body to reorient")]
    MissingBody,

    /// Source and destination are the same face.
    #[error("already on face {0}")]
    SameFace(CubeFace),
}

/// Transition timings that would fire deferred actions out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimingError {
    /// The rotation lock must come back strictly before gravity swaps.
    #[error("rotation lock at {lock_ms}ms must precede gravity swap at {swap_ms}ms")]
    LockNotBeforeSwap {
        /// Rotation lock offset.
        lock_ms: u64,
        /// Gravity swap offset.
        swap_ms: u64,
    },

    /// Gravity must swap while the reorientation is still running.
    #[error("gravity swap at {swap_ms}ms is after the {duration_ms}ms reorientation")]
    SwapAfterRotation {
        /// Gravity swap offset.
        swap_ms: u64,
        /// Reorientation length.
        duration_ms: u64,
    },

    /// Completion cannot come before the reorientation finishes.
    #[error("settle at {settle_ms}ms is before the {duration_ms}ms reorientation ends")]
    SettleBeforeRotationEnds {
        /// Completion offset.
        settle_ms: u64,
        /// Reorientation length.
        duration_ms: u64,
    },

    /// The transition would outlast the supported ceiling.
    #[error("settle at {settle_ms}ms exceeds the {max_ms}ms limit")]
    SettleTooLong {
        /// Completion offset.
        settle_ms: u64,
        /// Largest accepted completion offset.
        max_ms: u64,
    },
}
