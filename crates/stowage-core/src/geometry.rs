//! Points and axis-aligned boxes in room space.
//!
//! Positions are object centers. `y` is the vertical axis; `x` runs along
//! the room's width and `z` along its depth.

use crate::catalog::Footprint;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Positional tolerance for overlap tests. Objects placed flush against
/// each other differ by float jitter and must not count as overlapping.
pub const COLLISION_EPSILON: f64 = 0.001;

/// A point (or offset) in room space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Vec3) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Distance in the floor (x/z) plane, ignoring height.
    pub fn horizontal_distance(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// An axis-aligned bounding box described by center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half: Vec3,
}

impl Aabb {
    /// Box of `footprint` centered at `center`.
    pub fn from_center(center: Vec3, footprint: &Footprint) -> Self {
        Self {
            center,
            half: footprint.half_extents(),
        }
    }

    /// Whether the two boxes overlap on all three axes.
    ///
    /// On each axis the boxes overlap when
    /// `|center_a - center_b| < half_a + half_b - epsilon`, so boxes that
    /// merely touch (or interpenetrate by less than `epsilon`) do not.
    pub fn overlaps(&self, other: &Aabb, epsilon: f64) -> bool {
        let axis = |ca: f64, cb: f64, ha: f64, hb: f64| (ca - cb).abs() < ha + hb - epsilon;

        axis(self.center.x, other.center.x, self.half.x, other.half.x)
            && axis(self.center.y, other.center.y, self.half.y, other.half.y)
            && axis(self.center.z, other.center.z, self.half.z, other.half.z)
    }
}
