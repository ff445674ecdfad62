//! Axis-aligned geometry for bodies and the arena
//!
//! Every body is a box centered on its position. The arena is the half-open
//! rectangle `[0, width) x [0, height)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Non-empty intersection test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The fixed play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// Whether a box lies entirely inside the arena
    pub fn contains_box(&self, bounds: &Aabb) -> bool {
        bounds.min.x >= 0.0
            && bounds.min.y >= 0.0
            && bounds.max.x <= self.width
            && bounds.max.y <= self.height
    }

    /// Clamp a body center so its box of `size` stays inside the arena
    pub fn clamp_center(&self, center: Vec2, size: Vec2) -> Vec2 {
        let half = size / 2.0;
        Vec2::new(
            center.x.clamp(half.x, (self.width - half.x).max(half.x)),
            center.y.clamp(half.y, (self.height - half.y).max(half.y)),
        )
    }
}
