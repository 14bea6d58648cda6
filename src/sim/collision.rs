//! Collision detection between car footprints
//!
//! Cars are boxes on the road plane: x is lateral, y is longitudinal.
//! Touching edges count as a hit.

use glam::DVec2;

use crate::tuning::Tuning;

/// Axis-aligned box on the road plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_center(center: DVec2, half_extents: DVec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap test (symmetric, inclusive)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Footprint of a car centred at `pos`
pub fn car_box(pos: DVec2, tuning: &Tuning) -> Aabb {
    Aabb::from_center(pos, DVec2::new(tuning.car_half_width, tuning.car_half_length))
}

/// Index of the first box in `others` overlapping `subject`
pub fn first_overlap<I>(subject: &Aabb, others: I) -> Option<usize>
where
    I: IntoIterator<Item = Aabb>,
{
    others.into_iter().position(|b| subject.intersects(&b))
}
