use serde::{Deserialize, Serialize};

/// Screen-space line segment drawn for one boid.
///
/// Endpoints are in output-resolution pixels, centered on the boid and
/// oriented along its heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    /// Midpoint of the segment, rounded toward negative infinity.
    #[must_use]
    pub fn midpoint(&self) -> (i32, i32) {
        (
            (self.x1 + self.x2).div_euclid(2),
            (self.y1 + self.y2).div_euclid(2),
        )
    }

    /// Squared pixel length of the segment.
    #[must_use]
    pub fn length_squared(&self) -> i64 {
        let dx = i64::from(self.x2 - self.x1);
        let dy = i64::from(self.y2 - self.y1);
        dx * dx + dy * dy
    }
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// State of a single simulated agent.
///
/// `x`, `y`, `vx`, `vy` live in simulation space (the square `[0, D)²`).
/// `segment` and `color` are derived from them at the end of every update and
/// are what a renderer reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub segment: Segment,
    pub color: Option<Rgb>,
}

impl Boid {
    /// A boid at rest at the given simulation-space position.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    #[must_use]
    pub fn speed_squared(&self) -> f32 {
        self.vx * self.vx + self.vy * self.vy
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed_squared().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boid_at_rest() {
        let b = Boid::at(10.0, 20.0);
        assert_eq!(b.vx, 0.0);
        assert_eq!(b.vy, 0.0);
        assert_eq!(b.color, None);
    }

    #[test]
    fn test_speed() {
        let b = Boid::at(0.0, 0.0).with_velocity(3.0, 4.0);
        assert_eq!(b.speed_squared(), 25.0);
        assert!((b.speed() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_segment_geometry() {
        let s = Segment {
            x1: 0,
            y1: 0,
            x2: 6,
            y2: 8,
        };
        assert_eq!(s.length_squared(), 100);
        assert_eq!(s.midpoint(), (3, 4));
    }

    #[test]
    fn test_boid_json_shape() {
        let b = Boid {
            color: Some(Rgb::new(255, 0, 0)),
            ..Boid::at(1.0, 2.0)
        };
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"segment\""));
        let back: Boid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
