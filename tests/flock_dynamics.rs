mod common;

use common::{frame, frame_with_pointer, FlockBuilder};
use murmuration_core::{BoundaryMode, SqrtMode};
use murmuration_data::Boid;

#[test]
fn test_two_agents_steer_toward_each_other() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(5_000.0, 5_000.0))
        .with_boid(Boid::at(5_400.0, 5_000.0))
        .build();

    flock.update(&frame(16));

    let boids = flock.boids();
    assert!(boids[0].vx > 0.0, "left boid should move right: {}", boids[0].vx);
    assert!(boids[1].vx < 0.0, "right boid should move left: {}", boids[1].vx);
    assert!((boids[0].vx + boids[1].vx).abs() < 1e-4);
    assert_eq!(boids[0].vy, 0.0);
    assert_speed_within!(flock, 300.0, 0.0);
}

#[test]
fn test_isolated_agent_velocity_unchanged() {
    let mut flock = FlockBuilder::new()
        .with_boundary(BoundaryMode::Reflect)
        .with_boid(Boid::at(5_000.0, 5_000.0).with_velocity(40.0, -25.0))
        .with_boid(Boid::at(1_500.0, 8_500.0))
        .build();

    for _ in 0..5 {
        flock.update(&frame(16));
    }

    let me = flock.boids()[0];
    assert_eq!((me.vx, me.vy), (40.0, -25.0));
}

#[test]
fn test_weak_pointer_attracts() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(2_000.0, 5_000.0))
        .build();

    flock.update(&frame_with_pointer(16, 500, 500, false));

    let me = flock.boids()[0];
    assert!(me.vx > 0.0);
    assert!(me.vy.abs() < 1e-3);
}

#[test]
fn test_pointer_pulls_across_wrap_seam() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(9_900.0, 5_000.0))
        .build();

    // Pixel x = 5 maps to x = 50, 150 units away through the seam.
    flock.update(&frame_with_pointer(16, 5, 500, false));

    let me = flock.boids()[0];
    assert!(me.vx > 0.0, "expected pull toward the seam, got {}", me.vx);
    assert!(me.x > 9_900.0);
}

#[test]
fn test_repelling_pointer_pushes_away() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(2_000.0, 5_000.0))
        .build();

    let mut input = frame_with_pointer(16, 500, 500, false);
    input.pointer.polarity = input.pointer.polarity.flipped();
    flock.update(&input);

    assert!(flock.boids()[0].vx < 0.0);
}

#[test]
fn test_released_pointer_has_no_effect() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(2_000.0, 5_000.0))
        .build();

    let mut input = frame_with_pointer(16, 500, 500, true);
    input.pointer.buttons_held = 0;
    flock.update(&input);

    assert_eq!(flock.boids()[0].vx, 0.0);
}

#[test]
fn test_strong_pointer_respects_speed_limit() {
    for sqrt in [SqrtMode::Exact, SqrtMode::FastApprox] {
        let mut flock = FlockBuilder::new()
            .with_agents(400)
            .with_sqrt(sqrt)
            .build();

        for _ in 0..10 {
            flock.update(&frame_with_pointer(33, 500, 500, true));
            assert_speed_within!(flock, 300.0, sqrt.relative_error().max(1e-5));
        }
    }
}

#[test]
fn test_wrap_crosses_edge() {
    let mut flock = FlockBuilder::new()
        .with_boid(Boid::at(9_990.0, 100.0).with_velocity(300.0, 0.0))
        .build();

    flock.update(&frame(16));

    let me = flock.boids()[0];
    assert!(me.x < 100.0, "expected wrap to the left edge, got {}", me.x);
    assert_eq!(me.vx, 300.0);
}

#[test]
fn test_reflect_recovers_agent_past_far_wall() {
    let mut flock = FlockBuilder::new()
        .with_boundary(BoundaryMode::Reflect)
        .with_boid(Boid::at(10_005.0, 5_000.0).with_velocity(-20.0, 0.0))
        .build();

    flock.update(&frame(16));

    let me = flock.boids()[0];
    assert!((0.0..10_000.0).contains(&me.x), "x = {}", me.x);
    assert!(me.vx < 0.0);
}

#[test]
fn test_reflect_keeps_flock_inside() {
    let mut flock = FlockBuilder::new()
        .with_agents(300)
        .with_boundary(BoundaryMode::Reflect)
        .build();

    for _ in 0..30 {
        flock.update(&frame_with_pointer(50, 990, 990, true));
        assert_inside_domain!(flock, 10_000.0);
    }
}

#[test]
fn test_wrap_keeps_flock_inside() {
    let mut flock = FlockBuilder::new().with_agents(300).build();

    for _ in 0..30 {
        flock.update(&frame_with_pointer(50, 10, 990, true));
        assert_inside_domain!(flock, 10_000.0);
    }
}

#[test]
fn test_segments_follow_published_positions() {
    let mut flock = FlockBuilder::new().with_agents(100).build();
    for _ in 0..3 {
        flock.update(&frame(16));
    }
    for boid in flock.boids() {
        let (mx, my) = boid.segment.midpoint();
        assert!((mx as f32 - boid.x / 10.0).abs() <= 1.5);
        assert!((my as f32 - boid.y / 10.0).abs() <= 1.5);
        assert!(boid.segment.length_squared() <= 16 * 16);
        assert!(boid.color.is_some());
    }
}
