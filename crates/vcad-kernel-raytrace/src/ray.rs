//! Ray representation with a cached inverse direction.

use nalgebra::{Point3, Vector3};
use vcad_kernel_bounds::{Aabb, RealCoord};

use crate::classify::RayClassifier;
use crate::slab::{invert, slab_interval};

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// The direction is kept as given, not normalized, so every distance this
/// type reports is in units of the direction's length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: RealCoord> {
    /// Origin point of the ray.
    pub origin: Point3<T>,
    /// Direction of the ray.
    pub direction: Vector3<T>,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_direction: Vector3<T>,
}

impl<T: RealCoord> Ray<T> {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self {
            origin,
            direction,
            inv_direction: invert(&direction),
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: T) -> Point3<T> {
        let (o, d) = (&self.origin, &self.direction);
        Point3::new(o.x + d.x * t, o.y + d.y * t, o.z + d.z * t)
    }

    /// Per-axis reciprocal of the direction.
    #[inline]
    pub fn inv_direction(&self) -> &Vector3<T> {
        &self.inv_direction
    }

    /// Test ray-AABB intersection using the slab method.
    ///
    /// Returns `Some((t_min, t_max))` if the ray intersects the box,
    /// where `t_min` and `t_max` are the entry and exit parameters.
    /// `t_min` is zero when the origin is inside. Returns `None` if no
    /// intersection.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb<T>) -> Option<(T, T)> {
        slab_interval(aabb, &self.origin, &self.inv_direction, T::ZERO)
    }

    /// Entry parameter into the box, `+inf` on a miss.
    #[inline]
    pub fn entry_distance(&self, aabb: &Aabb<T>) -> T {
        match self.intersect_aabb(aabb) {
            Some((t_min, _)) => t_min,
            None => T::INFINITY,
        }
    }

    /// Classifier for testing this ray against many boxes.
    pub fn classifier(&self) -> RayClassifier<T> {
        RayClassifier::new(self.origin, self.direction)
    }
}
