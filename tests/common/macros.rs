/// Asserts that no boid of the flock moves faster than `limit` times
/// `(1 + tolerance)`.
#[macro_export]
macro_rules! assert_speed_within {
    ($flock:expr, $limit:expr, $tolerance:expr) => {
        for (i, boid) in $flock.boids().iter().enumerate() {
            let bound = $limit * (1.0 + $tolerance);
            assert!(
                boid.speed() <= bound,
                "Boid {} speed {} exceeds {}",
                i,
                boid.speed(),
                bound
            );
        }
    };
}

/// Asserts that every boid lies in `[0, size)` on both axes.
#[macro_export]
macro_rules! assert_inside_domain {
    ($flock:expr, $size:expr) => {
        for (i, boid) in $flock.boids().iter().enumerate() {
            assert!(
                (0.0..$size).contains(&boid.x) && (0.0..$size).contains(&boid.y),
                "Boid {} at ({}, {}) left the domain",
                i,
                boid.x,
                boid.y
            );
        }
    };
}
