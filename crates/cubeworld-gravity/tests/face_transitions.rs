//! End-to-end face transition scenarios driven tick by tick from a manual clock.

use cubeworld_faces::CubeFace;
use cubeworld_gravity::{
    Clock, GravityController, ManualClock, OrientedCamera, TransitionError, TransitionEvent,
    TransitionTiming,
};
use cubeworld_physics::OrientedBody;
use glam::Vec3;
use rapier3d::prelude::{RigidBody, RigidBodyBuilder};

const TICK_MS: u64 = 16;

struct Harness {
    clock: ManualClock,
    controller: GravityController,
    body: RigidBody,
    camera: OrientedCamera,
}

impl Harness {
    fn new() -> Self {
        let clock = ManualClock::new(0);
        let controller = GravityController::new(
            CubeFace::Top,
            Vec3::ZERO,
            TransitionTiming::default(),
            clock.now_ms(),
        )
        .unwrap();
        Self {
            clock,
            controller,
            body: RigidBodyBuilder::dynamic().lock_rotations().build(),
            camera: OrientedCamera::default(),
        }
    }

    /// Advance one tick with the player at `position`; returns the accepted face.
    fn tick(&mut self, position: Vec3) -> Option<CubeFace> {
        self.clock.advance(TICK_MS);
        self.controller.tick(
            position,
            Some(&mut self.body),
            Some(&mut self.camera),
            self.clock.now_ms(),
        )
    }

    fn run_for(&mut self, position: Vec3, ms: u64) -> Vec<CubeFace> {
        let end = self.clock.now_ms() + ms;
        let mut accepted = Vec::new();
        while self.clock.now_ms() < end {
            accepted.extend(self.tick(position));
        }
        accepted
    }

    fn body_up(&self) -> Vec3 {
        OrientedBody::rotation(&self.body) * Vec3::Y
    }
}

#[test]
fn test_player_above_center_settles_on_top() {
    let mut h = Harness::new();
    let accepted = h.run_for(Vec3::new(0.0, 300.0, 0.0), 3000);
    assert!(accepted.is_empty());
    assert_eq!(h.controller.current_face(), CubeFace::Top);
    assert!((h.controller.gravity() - Vec3::new(0.0, -9.81, 0.0)).length() < 1e-6);
}

#[test]
fn test_walking_from_top_to_right_swaps_gravity() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 1000);

    let accepted = h.run_for(Vec3::new(300.0, 0.0, 0.0), 2000);

    assert_eq!(accepted, vec![CubeFace::Right]);
    assert_eq!(h.controller.current_face(), CubeFace::Right);
    assert!(!h.controller.is_changing());
    assert!((h.controller.gravity() - Vec3::new(-9.81, 0.0, 0.0)).length() < 1e-6);
    assert!((h.body_up() - Vec3::X).length() < 1e-4);
    assert_eq!(h.camera.up, Vec3::X);
    assert!(h.body.rotations_locked());
}

#[test]
fn test_grace_window_ignores_spawn_position() {
    let mut h = Harness::new();
    // Spawned over the wrong face: nothing happens until 500ms have passed.
    let mut first_accept_at = None;
    for _ in 0..60 {
        if h.tick(Vec3::new(0.0, 0.0, -300.0)).is_some() && first_accept_at.is_none() {
            first_accept_at = Some(h.clock.now_ms());
        }
    }
    let at = first_accept_at.unwrap();
    assert!(at >= 500, "accepted at {at}ms, inside the grace window");
    assert_eq!(h.controller.current_face(), CubeFace::Back);
}

#[test]
fn test_timing_contract_relative_to_start() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 600);

    let accepted = h.tick(Vec3::new(0.0, 0.0, 300.0));
    assert_eq!(accepted, Some(CubeFace::Front));
    let t0 = h.clock.now_ms();
    assert!(!h.body.rotations_locked(), "rotation unlocked at t0");

    let old_gravity = CubeFace::Top.gravity();
    let new_gravity = CubeFace::Front.gravity();
    let position = Vec3::new(0.0, 0.0, 300.0);

    while h.clock.now_ms() < t0 + 1600 {
        h.tick(position);
        let elapsed = h.clock.now_ms() - t0;

        assert_eq!(
            h.body.rotations_locked(),
            elapsed >= 100,
            "rotation lock at +{elapsed}ms"
        );
        let expected = if elapsed < 200 { old_gravity } else { new_gravity };
        assert_eq!(h.controller.gravity(), expected, "gravity at +{elapsed}ms");
        assert_eq!(
            h.controller.is_changing(),
            elapsed < 1500,
            "transition state at +{elapsed}ms"
        );
    }
}

#[test]
fn test_back_to_back_requests_only_change_face_once() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 600);

    assert_eq!(h.tick(Vec3::new(300.0, 0.0, 0.0)), Some(CubeFace::Right));
    let t0 = h.clock.now_ms();

    // The player keeps going onto the front face before the first transition settles.
    h.run_for(Vec3::new(0.0, 0.0, 300.0), 700);
    assert!(h.controller.is_changing());
    assert_eq!(h.controller.current_face(), CubeFace::Right);

    // A direct request is refused too.
    let err = h
        .controller
        .change_gravity(
            CubeFace::Front,
            CubeFace::Right,
            Some(&mut h.body),
            h.clock.now_ms(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        TransitionError::Busy {
            to: CubeFace::Right
        }
    );

    let started: Vec<_> = h
        .controller
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, TransitionEvent::Started { .. }))
        .collect();
    assert_eq!(started.len(), 1);
    assert!(h.clock.now_ms() < t0 + 1500);
}

#[test]
fn test_chained_transitions_stay_consistent() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 600);

    let path = [
        (Vec3::new(300.0, 0.0, 0.0), CubeFace::Right),
        (Vec3::new(0.0, 0.0, 300.0), CubeFace::Front),
        (Vec3::new(0.0, -300.0, 0.0), CubeFace::Bottom),
        (Vec3::new(-300.0, 0.0, 0.0), CubeFace::Left),
        (Vec3::new(0.0, 300.0, 0.0), CubeFace::Top),
    ];
    for (position, face) in path {
        let accepted = h.run_for(position, 1700);
        assert_eq!(accepted, vec![face]);
        assert!(!h.controller.is_changing());
        assert!(
            (h.body_up() - face.normal()).length() < 1e-3,
            "body up {:?} after moving onto {face}",
            h.body_up()
        );
        assert_eq!(h.controller.gravity(), face.gravity());
    }
}

#[test]
fn test_cancel_on_teardown_leaves_no_pending_work() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 600);
    h.tick(Vec3::new(0.0, -300.0, 0.0));
    assert!(h.controller.is_changing());

    let now = h.clock.now_ms();
    assert!(h.controller.cancel_transition(Some(&mut h.body), now));
    assert!(h.controller.pending_actions().is_empty());
    assert_eq!(h.controller.gravity(), CubeFace::Bottom.gravity());

    let accepted = h.run_for(Vec3::new(0.0, -300.0, 0.0), 2000);
    assert!(accepted.is_empty());
    let events = h.controller.drain_events();
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, TransitionEvent::Completed { .. })),
        "a cancelled transition must not complete: {events:?}"
    );
}

#[test]
fn test_face_change_without_body_still_moves_gravity() {
    let mut h = Harness::new();
    h.run_for(Vec3::new(0.0, 300.0, 0.0), 600);

    h.clock.advance(TICK_MS);
    let accepted = h.controller.tick::<RigidBody, OrientedCamera>(
        Vec3::new(300.0, 0.0, 0.0),
        None,
        None,
        h.clock.now_ms(),
    );

    assert_eq!(accepted, Some(CubeFace::Right));
    assert_eq!(h.controller.current_face(), CubeFace::Right);
    assert!(!h.controller.is_changing());
    assert_eq!(h.controller.gravity(), CubeFace::Right.gravity());
    assert!(matches!(
        h.controller.drain_events().as_slice(),
        [TransitionEvent::GravitySwapped {
            face: CubeFace::Right,
            ..
        }]
    ));

    // Once the body is back, later face changes animate normally.
    let accepted = h.run_for(Vec3::new(0.0, 0.0, 300.0), 1700);
    assert_eq!(accepted, vec![CubeFace::Front]);
    assert_eq!(h.controller.gravity(), CubeFace::Front.gravity());
}
