//! Transition state of the controller.

use cubeworld_faces::CubeFace;
use glam::{Quat, Vec3};

/// Everything needed to re-evaluate an in-flight transition from elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTransition {
    /// Face the player is leaving.
    pub from: CubeFace,
    /// Face the player is moving onto.
    pub to: CubeFace,
    /// Timestamp the transition began, in milliseconds.
    pub started_at: u64,
    /// Body rotation when the transition began.
    pub start_rotation: Quat,
    /// Body rotation once the reorientation completes.
    pub target_rotation: Quat,
    /// Camera up at the start (the old face's up).
    pub start_camera_up: Vec3,
    /// Camera up at the end (the new face's up).
    pub target_camera_up: Vec3,
    /// Set once the final pose has been written after the reorientation window.
    pub pose_settled: bool,
}

impl ActiveTransition {
    /// Milliseconds since the transition began.
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }
}

/// Controller state: at rest on a face, or moving between two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransitionState {
    /// No transition in flight; detection may run.
    #[default]
    Stable,
    /// A transition is in flight; detection is suspended.
    Transitioning(ActiveTransition),
}

impl TransitionState {
    /// The in-flight transition, if any.
    pub fn active(&self) -> Option<&ActiveTransition> {
        match self {
            TransitionState::Stable => None,
            TransitionState::Transitioning(active) => Some(active),
        }
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, TransitionState::Transitioning(_))
    }
}
