//! Physics integration for the cube world: the Rapier world resource, the
//! player's rigid body, and the orientation handle the gravity controller
//! drives during a face change.
//!
//! Wraps the Rapier 3D physics engine behind a single [`PhysicsWorld`] resource
//! that owns all simulation state.

mod body;
mod player_body;

pub use body::OrientedBody;
pub use player_body::{
    PLAYER_HALF_HEIGHT, PLAYER_RADIUS, PlayerBody, player_position, set_player_position,
    spawn_player_body,
};

use bevy_ecs::prelude::*;
use glam::Vec3;
use rapier3d::prelude::*;

/// Central physics simulation resource owning all Rapier state.
///
/// Systems read via `Res<PhysicsWorld>` or mutate via `ResMut<PhysicsWorld>`.
/// The gravity field is overwritten every step from the gravity controller.
#[derive(Resource)]
pub struct PhysicsWorld {
    /// World-space gravity vector.
    pub gravity: Vector,
    /// Timestep and solver configuration.
    pub integration_parameters: IntegrationParameters,
    /// The main simulation pipeline.
    pub physics_pipeline: PhysicsPipeline,
    /// Tracks sleeping/awake body islands.
    pub island_manager: IslandManager,
    /// Broad-phase collision detection.
    pub broad_phase: BroadPhaseBvh,
    /// Narrow-phase collision detection (contact manifolds).
    pub narrow_phase: NarrowPhase,
    /// All rigid bodies in the simulation.
    pub rigid_body_set: RigidBodySet,
    /// All colliders in the simulation.
    pub collider_set: ColliderSet,
    /// Impulse-based joints.
    pub impulse_joint_set: ImpulseJointSet,
    /// Multibody joints.
    pub multibody_joint_set: MultibodyJointSet,
    /// Continuous collision detection solver.
    pub ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Creates a physics world with top-face gravity `(0, -9.81, 0)` and a
    /// timestep of `1/60` seconds.
    pub fn new() -> Self {
        Self::with_timestep(1.0 / 60.0)
    }

    /// Creates a physics world stepping at `dt` seconds.
    pub fn with_timestep(dt: f32) -> Self {
        let integration_parameters = IntegrationParameters {
            dt,
            ..Default::default()
        };

        Self {
            gravity: Vector::new(0.0, -9.81, 0.0),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Advances the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Sets the world gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = Vector::new(gravity.x, gravity.y, gravity.z);
    }

    /// Returns the current world gravity.
    pub fn gravity(&self) -> Vec3 {
        Vec3::new(self.gravity.x, self.gravity.y, self.gravity.z)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// ECS system that steps the physics simulation once per invocation.
pub fn physics_step_system(mut physics: ResMut<PhysicsWorld>) {
    physics.step();
}
