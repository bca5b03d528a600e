mod common;

use common::{frame, frame_with_pointer, FlockBuilder};
use murmuration_core::BoundaryMode;

#[test]
fn test_same_seed_same_scatter() {
    let a = FlockBuilder::new().with_agents(500).with_seed(9).build();
    let b = FlockBuilder::new().with_agents(500).with_seed(9).build();
    let c = FlockBuilder::new().with_agents(500).with_seed(10).build();
    assert_eq!(a.boids(), b.boids());
    assert_ne!(a.boids(), c.boids());
}

#[test]
fn test_respawn_reproducible_mid_run() {
    let mut a = FlockBuilder::new().with_agents(200).build();
    let mut b = FlockBuilder::new().with_agents(200).with_seed(77).build();
    for _ in 0..5 {
        a.update(&frame(16));
    }
    b.update(&frame(16));
    a.respawn(1234);
    b.respawn(1234);
    assert_eq!(a.boids(), b.boids());
    assert!(a.boids().iter().all(|boid| boid.vx == 0.0 && boid.vy == 0.0));
}

#[test]
fn test_worker_count_does_not_change_trajectories() {
    for boundary in [BoundaryMode::Wrap, BoundaryMode::Reflect] {
        let mut single = FlockBuilder::new()
            .with_agents(600)
            .with_workers(1)
            .with_boundary(boundary)
            .build();
        let mut many = FlockBuilder::new()
            .with_agents(600)
            .with_workers(6)
            .with_boundary(boundary)
            .build();

        for step in 0..20 {
            let input = if step % 2 == 0 {
                frame_with_pointer(20, 300, 700, step % 4 == 0)
            } else {
                frame(20)
            };
            single.update(&input);
            many.update(&input);
            assert_eq!(single.boids(), many.boids(), "diverged at step {step}");
        }
        assert_eq!(single.workers(), 1);
        assert_eq!(many.workers(), 6);
    }
}

#[test]
fn test_long_run_stays_finite() {
    let mut flock = FlockBuilder::new().with_agents(400).build();
    for step in 0..200 {
        let input = if step % 50 < 25 {
            frame_with_pointer(16, 500, 500, true)
        } else {
            frame(16)
        };
        flock.update(&input);
    }
    assert!(flock
        .boids()
        .iter()
        .all(|b| b.x.is_finite() && b.y.is_finite() && b.vx.is_finite() && b.vy.is_finite()));
    assert_eq!(flock.frame(), 200);
}
