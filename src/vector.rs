//! Minimal 3D vector math for pitch-space positions and velocities.
//!
//! Axes follow the usual game-engine convention: `y` is up and the pitch
//! lies in the `x`/`z` plane. Yaw is measured in degrees about `+y`, with
//! yaw 0 facing `+z` and positive yaw turning toward `+x`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitudes below this are treated as zero when normalizing.
const NORMALIZE_EPSILON: f64 = 1e-5;

/// A 3D vector in pitch space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Creates a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Returns the zero vector for (near-)zero input rather than NaNs.
    pub fn normalized(&self) -> Vec3 {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            Vec3::ZERO
        } else {
            *self * (1.0 / len)
        }
    }

    /// Length of the projection onto the ground (`x`/`z`) plane.
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Unit forward vector for a yaw angle in degrees.
    pub fn forward_from_yaw(yaw_deg: f64) -> Vec3 {
        let r = yaw_deg.to_radians();
        Vec3::new(r.sin(), 0.0, r.cos())
    }

    /// Unit right vector for a yaw angle in degrees.
    pub fn right_from_yaw(yaw_deg: f64) -> Vec3 {
        let r = yaw_deg.to_radians();
        Vec3::new(r.cos(), 0.0, -r.sin())
    }

    /// Flattened features `[x, y, z]` for observation vectors.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
