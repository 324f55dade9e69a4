//! ECS wiring: resources and systems that run the gravity controller inside
//! a fixed-rate schedule alongside the physics step.
//!
//! Per tick, in order: advance the simulation clock, run the controller
//! (transition update, boundary check, transition start), copy the applied
//! gravity into the physics world, step physics.

use bevy_ecs::prelude::*;
use cubeworld_physics::{PhysicsWorld, PlayerBody, physics_step_system, player_position};
use rapier3d::prelude::RigidBody;

use crate::camera::OrientedCamera;
use crate::clock::Clock;
use crate::controller::GravityController;

/// Fixed-rate simulation clock. Time is derived from the tick count so it
/// never drifts at rates that do not divide 1000.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimClock {
    /// Ticks elapsed since the session started.
    pub ticks: u64,
    /// Ticks per second.
    pub tick_rate_hz: u32,
}

impl SimClock {
    /// Clock at tick zero running at `tick_rate_hz` (clamped to at least 1).
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            ticks: 0,
            tick_rate_hz: tick_rate_hz.max(1),
        }
    }

    /// Seconds per tick.
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.ticks * 1000 / u64::from(self.tick_rate_hz)
    }
}

/// The player's camera, as seen by the gravity controller.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerCamera(pub OrientedCamera);

/// Advances [`SimClock`] by one tick.
pub fn advance_clock_system(mut clock: ResMut<SimClock>) {
    clock.ticks += 1;
}

/// Runs one controller tick against the player's body and camera.
///
/// Without a player body (not yet spawned, or removed) the deferred actions
/// of an in-flight transition still fire; detection is skipped.
pub fn face_transition_system(
    clock: Res<SimClock>,
    player: Option<Res<PlayerBody>>,
    mut physics: ResMut<PhysicsWorld>,
    mut controller: ResMut<GravityController>,
    mut camera: ResMut<PlayerCamera>,
) {
    let now = clock.now_ms();
    let camera = Some(&mut camera.0);

    let position = player
        .as_deref()
        .and_then(|player| player_position(&physics, player));
    let (Some(player), Some(position)) = (player, position) else {
        controller.update::<RigidBody, _>(now, None, camera);
        return;
    };

    let body = physics.rigid_body_set.get_mut(player.body);
    controller.tick(position, body, camera, now);
}

/// Copies the controller's applied gravity into the physics world.
pub fn sync_gravity_system(controller: Res<GravityController>, mut physics: ResMut<PhysicsWorld>) {
    physics.set_gravity(controller.gravity());
}

/// Schedule running the full per-tick pipeline in order.
pub fn build_gravity_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            advance_clock_system,
            face_transition_system,
            sync_gravity_system,
            physics_step_system,
        )
            .chain(),
    );
    schedule
}
