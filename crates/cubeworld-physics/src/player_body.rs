//! The player's dynamic capsule body.
//!
//! The player is a dynamic body driven by world gravity. Its rotation is
//! locked at spawn; the gravity controller releases the lock briefly when the
//! player crosses onto a new face.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use rapier3d::prelude::*;

use crate::{OrientedBody, PhysicsWorld};

/// Capsule half-height of the cylindrical segment (meters).
pub const PLAYER_HALF_HEIGHT: f32 = 0.6;
/// Capsule radius (meters).
pub const PLAYER_RADIUS: f32 = 0.3;

/// Handles of the player's body and collider.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerBody {
    /// Rigid body handle.
    pub body: RigidBodyHandle,
    /// Capsule collider handle.
    pub collider: ColliderHandle,
}

/// Spawn the player at `position` with `rotation`, rotation-locked.
///
/// The capsule is 1.8m tall (2×0.6 half-height + 2×0.3 radius).
pub fn spawn_player_body(physics: &mut PhysicsWorld, position: Vec3, rotation: Quat) -> PlayerBody {
    let rigid_body = RigidBodyBuilder::dynamic()
        .translation(Vector::new(position.x, position.y, position.z))
        .lock_rotations()
        .build();
    let body = physics.rigid_body_set.insert(rigid_body);
    if let Some(b) = physics.rigid_body_set.get_mut(body) {
        OrientedBody::set_rotation(b, rotation, false);
    }

    let collider = ColliderBuilder::capsule_y(PLAYER_HALF_HEIGHT, PLAYER_RADIUS)
        .friction(0.0)
        .build();
    let collider =
        physics
            .collider_set
            .insert_with_parent(collider, body, &mut physics.rigid_body_set);

    tracing::debug!(?position, "spawned player body");
    PlayerBody { body, collider }
}

/// World position of the player, or `None` if the body was removed.
pub fn player_position(physics: &PhysicsWorld, player: &PlayerBody) -> Option<Vec3> {
    physics.rigid_body_set.get(player.body).map(|b| {
        let t = b.translation();
        Vec3::new(t.x, t.y, t.z)
    })
}

/// Teleport the player and clear its linear velocity.
///
/// Returns `false` if the body no longer exists.
pub fn set_player_position(physics: &mut PhysicsWorld, player: &PlayerBody, position: Vec3) -> bool {
    match physics.rigid_body_set.get_mut(player.body) {
        Some(b) => {
            b.set_translation(Vector::new(position.x, position.y, position.z), true);
            b.set_linvel(Vector::new(0.0, 0.0, 0.0), true);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_player_is_rotation_locked() {
        let mut physics = PhysicsWorld::new();
        let player = spawn_player_body(&mut physics, Vec3::new(0.0, 300.0, 0.0), Quat::IDENTITY);
        let body = &physics.rigid_body_set[player.body];
        assert!(body.rotations_locked());
        assert_eq!(physics.collider_set.len(), 1);
    }

    #[test]
    fn test_player_position_reads_translation() {
        let mut physics = PhysicsWorld::new();
        let player = spawn_player_body(&mut physics, Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        let pos = player_position(&physics, &player).unwrap();
        assert!((pos - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_teleport_moves_player() {
        let mut physics = PhysicsWorld::new();
        let player = spawn_player_body(&mut physics, Vec3::new(0.0, 300.0, 0.0), Quat::IDENTITY);
        assert!(set_player_position(&mut physics, &player, Vec3::new(300.0, 0.0, 0.0)));
        let pos = player_position(&physics, &player).unwrap();
        assert!((pos.x - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_removed_player_has_no_position() {
        let mut physics = PhysicsWorld::new();
        let player = spawn_player_body(&mut physics, Vec3::ZERO, Quat::IDENTITY);
        physics.rigid_body_set.remove(
            player.body,
            &mut physics.island_manager,
            &mut physics.collider_set,
            &mut physics.impulse_joint_set,
            &mut physics.multibody_joint_set,
            true,
        );
        assert!(player_position(&physics, &player).is_none());
        assert!(!set_player_position(&mut physics, &player, Vec3::ONE));
    }

    #[test]
    fn test_player_falls_under_gravity() {
        let mut physics = PhysicsWorld::new();
        let player = spawn_player_body(&mut physics, Vec3::new(0.0, 300.0, 0.0), Quat::IDENTITY);
        for _ in 0..30 {
            physics.step();
        }
        let pos = player_position(&physics, &player).unwrap();
        assert!(pos.y < 300.0, "player should fall: y={}", pos.y);
    }
}
