//! Boundary gate: decides when face detection may run and whether its
//! result is a real face change.

use cubeworld_faces::CubeFace;
use glam::Vec3;
use tracing::debug;

use crate::controller::GravityController;

impl GravityController {
    /// Detect a face change for a player at `position`.
    ///
    /// Returns `None` during the startup grace window, while a transition is
    /// in flight, when the player sits exactly on the cube center, or when the
    /// detected face is the current one. Otherwise the detected face becomes
    /// current and is returned; the face it replaced is kept as
    /// [`previous_face`](GravityController::previous_face).
    pub fn check_boundaries(&mut self, position: Vec3, now: u64) -> Option<CubeFace> {
        if now.saturating_sub(self.session_start) < self.timing.startup_grace_ms {
            return None;
        }
        if self.transition.is_transitioning() {
            return None;
        }

        let detected = self.detector.try_detect(position)?;
        if detected == self.current_face {
            return None;
        }

        self.previous_face = self.current_face;
        self.current_face = detected;
        debug!(from = %self.previous_face, to = %detected, ?position, "face boundary crossed");
        Some(detected)
    }
}
