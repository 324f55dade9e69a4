//! Cube-face gravity controller.
//!
//! Detects which face of the cube world the player stands on and, when that
//! face changes, runs a timed transition: the player's body and camera are
//! eased onto the new face while gravity switches shortly after the
//! reorientation begins.
//!
//! The controller is a deterministic state machine. It never reads a wall
//! clock and never blocks; every entry point takes the current time in
//! milliseconds and deferred work sits in an explicit schedule that
//! [`GravityController::update`] drains.

pub mod camera;
pub mod clock;
mod controller;
mod error;
mod events;
mod gate;
pub mod interpolator;
mod schedule;
pub mod systems;
mod timing;
mod transition;

pub use camera::{OrientedCamera, UpCamera};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::GravityController;
pub use error::{TimingError, TransitionError};
pub use events::TransitionEvent;
pub use interpolator::{InterpolatedPose, ease_out_cubic, interpolate, shortest_arc};
pub use schedule::{ActionSchedule, DeferredAction, ScheduledAction};
pub use systems::{
    PlayerCamera, SimClock, advance_clock_system, build_gravity_schedule, face_transition_system,
    sync_gravity_system,
};
pub use timing::{MAX_SETTLE_MS, TransitionTiming};
pub use transition::{ActiveTransition, TransitionState};
