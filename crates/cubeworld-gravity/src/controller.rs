//! Transition orchestration: owns the face/gravity state and drives a face
//! change from acceptance to completion.
//!
//! A transition runs `Stable → Transitioning → Stable`:
//!
//! 1. On entry the body's rotation lock is released and its spin is zeroed.
//! 2. The target rotation is the shortest arc between the two face normals,
//!    composed onto the body's current rotation.
//! 3. Each [`GravityController::update`] samples the eased reorientation.
//! 4. Deferred actions fire from the schedule at fixed offsets: rotation
//!    relock, then gravity swap, then completion.

use bevy_ecs::prelude::*;
use cubeworld_faces::{CubeFace, QuadrantDetector};
use cubeworld_physics::OrientedBody;
use glam::Vec3;
use tracing::{debug, info, warn};

use crate::camera::UpCamera;
use crate::error::{TimingError, TransitionError};
use crate::events::TransitionEvent;
use crate::interpolator::{self, interpolate, shortest_arc};
use crate::schedule::{ActionSchedule, DeferredAction, ScheduledAction};
use crate::timing::TransitionTiming;
use crate::transition::{ActiveTransition, TransitionState};

/// Camera up vectors shorter than this are not written (antipodal lerp midpoint).
const MIN_CAMERA_UP_LENGTH_SQ: f32 = 1e-8;

/// Session-scoped gravity and orientation state for one player.
///
/// Constructed once per session. All mutation goes through its methods; the
/// `Transitioning` state is the only guard against overlapping transitions.
#[derive(Resource, Debug)]
pub struct GravityController {
    pub(crate) detector: QuadrantDetector,
    pub(crate) timing: TransitionTiming,
    pub(crate) current_face: CubeFace,
    pub(crate) previous_face: CubeFace,
    pub(crate) transition: TransitionState,
    pub(crate) session_start: u64,
    gravity: Vec3,
    schedule: ActionSchedule,
    events: Vec<TransitionEvent>,
}

impl GravityController {
    /// Start a session on `face` at time `now`, with the cube centered at `center`.
    pub fn new(
        face: CubeFace,
        center: Vec3,
        timing: TransitionTiming,
        now: u64,
    ) -> Result<Self, TimingError> {
        timing.validate()?;
        Ok(Self {
            detector: QuadrantDetector::new(center),
            timing,
            current_face: face,
            previous_face: face,
            transition: TransitionState::Stable,
            session_start: now,
            gravity: face.gravity(),
            schedule: ActionSchedule::new(),
            events: Vec::new(),
        })
    }

    /// Session on the top face of a cube centered at the origin, default timing.
    pub fn with_defaults(now: u64) -> Self {
        Self {
            detector: QuadrantDetector::default(),
            timing: TransitionTiming::default(),
            current_face: CubeFace::Top,
            previous_face: CubeFace::Top,
            transition: TransitionState::Stable,
            session_start: now,
            gravity: CubeFace::Top.gravity(),
            schedule: ActionSchedule::new(),
            events: Vec::new(),
        }
    }

    /// Face the player currently stands on.
    pub fn current_face(&self) -> CubeFace {
        self.current_face
    }

    /// Face the player stood on before the most recent accepted change.
    pub fn previous_face(&self) -> CubeFace {
        self.previous_face
    }

    /// Whether a transition is in flight.
    pub fn is_changing(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// Applied gravity. Lags `current_face` during the first part of a transition.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Transition state.
    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    /// Timing this controller runs with.
    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    /// Cube center used for face detection.
    pub fn cube_center(&self) -> Vec3 {
        self.detector.center
    }

    /// Timestamp the session started at.
    pub fn session_start(&self) -> u64 {
        self.session_start
    }

    /// Deferred actions still waiting to fire, earliest first.
    pub fn pending_actions(&self) -> &[ScheduledAction] {
        self.schedule.pending()
    }

    /// Linear reorientation progress at `now`, or `None` when stable.
    pub fn progress(&self, now: u64) -> Option<f32> {
        self.transition.active().map(|active| {
            interpolator::progress(active.elapsed(now), self.timing.rotation_duration_ms)
        })
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a transition from `old_face` to `new_face`.
    ///
    /// Rejected without touching any state when a transition is already in
    /// flight, when the faces are equal, or when `body` is `None`.
    pub fn change_gravity<B>(
        &mut self,
        new_face: CubeFace,
        old_face: CubeFace,
        body: Option<&mut B>,
        now: u64,
    ) -> Result<(), TransitionError>
    where
        B: OrientedBody + ?Sized,
    {
        if let Some(active) = self.transition.active() {
            debug!(requested = %new_face, in_flight = %active.to, "transition rejected: busy");
            return Err(TransitionError::Busy { to: active.to });
        }
        if new_face == old_face {
            return Err(TransitionError::SameFace(new_face));
        }
        let Some(body) = body else {
            warn!(from = %old_face, to = %new_face, "transition skipped: no player body");
            return Err(TransitionError::MissingBody);
        };

        body.lock_rotations(false);
        body.set_angular_velocity(Vec3::ZERO, true);

        let old = old_face.orientation();
        let new = new_face.orientation();
        let start_rotation = body.rotation();
        let delta = shortest_arc(old.up, new.up);
        let target_rotation = (delta * start_rotation).normalize();

        self.transition = TransitionState::Transitioning(ActiveTransition {
            from: old_face,
            to: new_face,
            started_at: now,
            start_rotation,
            target_rotation,
            start_camera_up: old.up,
            target_camera_up: new.up,
            pose_settled: false,
        });
        self.current_face = new_face;

        // Saturating so a clock near u64::MAX still keeps the actions in order.
        self.schedule.clear();
        self.schedule.schedule(
            now.saturating_add(self.timing.rotation_lock_ms),
            DeferredAction::RelockRotation,
        );
        self.schedule.schedule(
            now.saturating_add(self.timing.gravity_swap_ms),
            DeferredAction::SwapGravity(new_face),
        );
        self.schedule.schedule(
            now.saturating_add(self.timing.settle_ms),
            DeferredAction::Complete,
        );

        self.events.push(TransitionEvent::Started {
            from: old_face,
            to: new_face,
            at: now,
        });
        info!(from = %old_face, to = %new_face, at = now, "face transition started");
        Ok(())
    }

    /// Advance an in-flight transition to `now`.
    ///
    /// Writes the eased body rotation and camera up, then fires every
    /// deferred action that has come due, in due order. Does nothing while
    /// stable. A missing body or camera only skips the writes to it.
    pub fn update<B, C>(&mut self, now: u64, mut body: Option<&mut B>, camera: Option<&mut C>)
    where
        B: OrientedBody + ?Sized,
        C: UpCamera + ?Sized,
    {
        let TransitionState::Transitioning(active) = &mut self.transition else {
            return;
        };

        if !active.pose_settled {
            let pose = interpolate(
                active.start_rotation,
                active.target_rotation,
                active.start_camera_up,
                active.target_camera_up,
                active.elapsed(now),
                self.timing.rotation_duration_ms,
            );

            if let Some(body) = body.as_deref_mut() {
                body.set_rotation(pose.rotation, true);
            }
            if let Some(camera) = camera
                && pose.camera_up.length_squared() > MIN_CAMERA_UP_LENGTH_SQ
            {
                camera.set_up(pose.camera_up);
                camera.update_projection_matrix();
            }
            active.pose_settled = pose.progress >= 1.0;
        }

        for scheduled in self.schedule.drain_due(now) {
            self.fire(scheduled, body.as_deref_mut());
        }
    }

    fn fire<B>(&mut self, scheduled: ScheduledAction, body: Option<&mut B>)
    where
        B: OrientedBody + ?Sized,
    {
        let at = scheduled.due_ms;
        match scheduled.action {
            DeferredAction::RelockRotation => {
                match body {
                    Some(body) => body.lock_rotations(true),
                    None => debug!("rotation relock skipped: no player body"),
                }
                self.events.push(TransitionEvent::RotationLocked { at });
                debug!(at, "rotation relocked");
            }
            DeferredAction::SwapGravity(face) => {
                self.gravity = face.gravity();
                self.events.push(TransitionEvent::GravitySwapped {
                    face,
                    gravity: self.gravity,
                    at,
                });
                debug!(%face, gravity = ?self.gravity, at, "gravity swapped");
            }
            DeferredAction::Complete => {
                self.transition = TransitionState::Stable;
                self.events.push(TransitionEvent::Completed {
                    face: self.current_face,
                    at,
                });
                info!(face = %self.current_face, at, "face transition complete");
            }
        }
    }

    /// Abort an in-flight transition, for session teardown.
    ///
    /// Pending actions are dropped, the body snaps to the target rotation and
    /// is relocked, and the current face's gravity is applied. Returns `false`
    /// if nothing was in flight.
    pub fn cancel_transition<B>(&mut self, body: Option<&mut B>, now: u64) -> bool
    where
        B: OrientedBody + ?Sized,
    {
        let Some(active) = self.transition.active().copied() else {
            return false;
        };

        self.schedule.clear();
        if let Some(body) = body {
            body.set_rotation(active.target_rotation, true);
            body.lock_rotations(true);
        }
        self.gravity = self.current_face.gravity();
        self.transition = TransitionState::Stable;
        self.events.push(TransitionEvent::Cancelled {
            face: active.to,
            at: now,
        });
        info!(face = %active.to, at = now, "face transition cancelled");
        true
    }

    /// Start a fresh session on `face` at `now`, dropping any transition.
    ///
    /// Re-arms the startup grace window.
    pub fn restart_session(&mut self, face: CubeFace, now: u64) {
        self.schedule.clear();
        self.transition = TransitionState::Stable;
        self.current_face = face;
        self.previous_face = face;
        self.gravity = face.gravity();
        self.session_start = now;
        self.events.clear();
        debug!(%face, at = now, "gravity session restarted");
    }

    /// One simulation tick: advance any transition, run boundary detection,
    /// and begin a transition if the player crossed onto a new face.
    ///
    /// Returns the newly detected face, if any. A detected face whose
    /// transition could not start is still returned and remains the current
    /// face. Without a body the new face's gravity is applied at once.
    pub fn tick<B, C>(
        &mut self,
        position: Vec3,
        mut body: Option<&mut B>,
        camera: Option<&mut C>,
        now: u64,
    ) -> Option<CubeFace>
    where
        B: OrientedBody + ?Sized,
        C: UpCamera + ?Sized,
    {
        self.update(now, body.as_deref_mut(), camera);

        let new_face = self.check_boundaries(position, now)?;
        let old_face = self.previous_face;
        match self.change_gravity(new_face, old_face, body, now) {
            Ok(()) => {}
            Err(TransitionError::MissingBody) => {
                // The gate already moved to the new face; keep gravity with it.
                self.gravity = new_face.gravity();
                self.events.push(TransitionEvent::GravitySwapped {
                    face: new_face,
                    gravity: self.gravity,
                    at: now,
                });
                warn!(from = %old_face, to = %new_face, "no player body, gravity switched without reorientation");
            }
            Err(err) => {
                warn!(%err, from = %old_face, to = %new_face, "face change not animated");
            }
        }
        Some(new_face)
    }
}
