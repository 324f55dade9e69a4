//! Headless cube world session.
//!
//! Spawns a player above the top face, then teleports it over the right and
//! front faces while the gravity controller runs at a fixed tick rate.
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubeworld-demo -- --duration 12 --log-level debug`.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use cubeworld_config::{CliArgs, Config};
use cubeworld_faces::CubeFace;
use cubeworld_gravity::{
    Clock, GravityController, PlayerCamera, SimClock, TimingError, TransitionEvent,
    TransitionTiming, build_gravity_schedule,
};
use cubeworld_physics::{
    PhysicsWorld, PlayerBody, player_position, set_player_position, spawn_player_body,
};
use glam::Vec3;
use tracing::{error, info};

/// Faces visited by the scripted walk, in order.
const WALK: [CubeFace; 3] = [CubeFace::Top, CubeFace::Right, CubeFace::Front];

/// Where the player should stand `elapsed_s` into a run of `duration_s`.
///
/// The run is split into equal legs, one per entry of [`WALK`].
fn scripted_position(center: Vec3, radius: f32, elapsed_s: f32, duration_s: f32) -> Vec3 {
    let leg = if duration_s > 0.0 {
        ((elapsed_s / duration_s) * WALK.len() as f32) as usize
    } else {
        0
    };
    let face = WALK[leg.min(WALK.len() - 1)];
    center + face.normal() * radius
}

fn build_world(config: &Config, timing: TransitionTiming) -> Result<World, TimingError> {
    let center = Vec3::from_array(config.world.cube_center);
    let clock = SimClock::new(config.world.tick_rate_hz);

    let mut physics = PhysicsWorld::with_timestep(clock.step_seconds());
    let start = WALK[0].orientation();
    let spawn = scripted_position(center, config.world.walk_radius, 0.0, config.world.duration_s);
    let player = spawn_player_body(&mut physics, spawn, start.baseline_rotation);
    physics.set_gravity(start.gravity);

    let controller = GravityController::new(WALK[0], center, timing, clock.now_ms())?;

    let mut world = World::new();
    world.insert_resource(physics);
    world.insert_resource(player);
    world.insert_resource(PlayerCamera::default());
    world.insert_resource(controller);
    world.insert_resource(clock);
    Ok(world)
}

/// Teleport the player whenever the script moves it to a new leg.
fn follow_script(world: &mut World, config: &Config, target: &mut Vec3) {
    let clock = *world.resource::<SimClock>();
    let elapsed_s = clock.now_ms() as f32 / 1000.0;
    let next = scripted_position(
        Vec3::from_array(config.world.cube_center),
        config.world.walk_radius,
        elapsed_s,
        config.world.duration_s,
    );
    if next == *target {
        return;
    }
    *target = next;

    let player = *world.resource::<PlayerBody>();
    if set_player_position(&mut world.resource_mut::<PhysicsWorld>(), &player, next) {
        info!(at = clock.now_ms(), position = ?next, "player moved");
    }
}

fn log_events(world: &mut World) {
    let events = world.resource_mut::<GravityController>().drain_events();
    for event in events {
        match event {
            TransitionEvent::Started { from, to, at } => {
                info!("[{at:>6}ms] transition {from} -> {to} started")
            }
            TransitionEvent::RotationLocked { at } => info!("[{at:>6}ms] rotation relocked"),
            TransitionEvent::GravitySwapped { face, gravity, at } => {
                info!("[{at:>6}ms] gravity swapped to {face}: {gravity:?}")
            }
            TransitionEvent::Completed { face, at } => {
                info!("[{at:>6}ms] transition to {face} complete")
            }
            TransitionEvent::Cancelled { face, at } => {
                info!("[{at:>6}ms] transition to {face} cancelled")
            }
        }
    }
}

fn run(config: &Config, timing: TransitionTiming) -> Result<(), TimingError> {
    let mut world = build_world(config, timing)?;
    let mut schedule = build_gravity_schedule();

    let ticks = (config.world.duration_s.max(0.0) * config.world.tick_rate_hz as f32) as u64;
    info!(
        ticks,
        tick_rate_hz = config.world.tick_rate_hz,
        "Starting cube world session"
    );

    let mut target = Vec3::NAN;
    for _ in 0..ticks {
        follow_script(&mut world, config, &mut target);
        schedule.run(&mut world);
        if config.debug.log_events {
            log_events(&mut world);
        }
    }

    let now = world.resource::<SimClock>().now_ms();
    let player = *world.resource::<PlayerBody>();
    let position = player_position(world.resource::<PhysicsWorld>(), &player);
    let camera_up = world.resource::<PlayerCamera>().0.up;

    // Teardown: anything still in flight snaps to its target.
    world.resource_scope(|world, mut controller: Mut<GravityController>| {
        let mut physics = world.resource_mut::<PhysicsWorld>();
        controller.cancel_transition(physics.rigid_body_set.get_mut(player.body), now);
        info!(
            face = %controller.current_face(),
            gravity = ?controller.gravity(),
            ?position,
            ?camera_up,
            "Cube world session finished"
        );
    });
    if config.debug.log_events {
        log_events(&mut world);
    }
    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cubeworld")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cubeworld_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("Invalid config: {e}");
        std::process::exit(1);
    }
    let result = TransitionTiming::try_from(&config.gravity).and_then(|timing| run(&config, timing));
    if let Err(e) = result {
        error!("Invalid gravity timing: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_visits_faces_in_order() {
        let c = Vec3::ZERO;
        assert_eq!(scripted_position(c, 300.0, 0.0, 9.0), Vec3::new(0.0, 300.0, 0.0));
        assert_eq!(scripted_position(c, 300.0, 3.5, 9.0), Vec3::new(300.0, 0.0, 0.0));
        assert_eq!(scripted_position(c, 300.0, 8.9, 9.0), Vec3::new(0.0, 0.0, 300.0));
        assert_eq!(scripted_position(c, 300.0, 20.0, 9.0), Vec3::new(0.0, 0.0, 300.0));
    }

    #[test]
    fn test_script_is_offset_by_cube_center() {
        let c = Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(scripted_position(c, 5.0, 0.0, 0.0), Vec3::new(10.0, 25.0, 30.0));
    }

    #[test]
    fn test_player_spawns_in_start_face_frame() {
        let config = Config::default();
        let world = build_world(&config, TransitionTiming::default()).unwrap();
        let player = *world.resource::<PlayerBody>();
        let physics = world.resource::<PhysicsWorld>();
        let body = physics.rigid_body_set.get(player.body).unwrap();

        let start = WALK[0].orientation();
        let rotation = cubeworld_physics::OrientedBody::rotation(body);
        assert!(rotation.dot(start.baseline_rotation).abs() > 1.0 - 1e-5);
        assert!((rotation * Vec3::Y - start.up).length() < 1e-5);
        assert_eq!(physics.gravity(), start.gravity);
        assert_eq!(world.resource::<GravityController>().current_face(), WALK[0]);
    }

    #[test]
    fn test_scripted_session_ends_on_front_face() {
        let mut config = Config::default();
        config.world.duration_s = 6.0;
        config.debug.log_events = false;
        let mut world = build_world(&config, TransitionTiming::default()).unwrap();
        let mut schedule = build_gravity_schedule();

        let mut target = Vec3::NAN;
        for _ in 0..(6 * 60) {
            follow_script(&mut world, &config, &mut target);
            schedule.run(&mut world);
        }

        let controller = world.resource::<GravityController>();
        assert_eq!(controller.current_face(), CubeFace::Front);
        assert!(!controller.is_changing());
        assert_eq!(controller.gravity(), CubeFace::Front.gravity());
    }
}
