//! Finite line segment tests for broad-phase culling.
//!
//! These combine the half-line slab test with a distance bound between the
//! segment start and the box. The bound is looser than clipping the slab
//! interval: a segment that passes near a box without reaching it along its
//! own direction can still be reported as a hit. Misses are never reported
//! for a segment that does touch the box. Callers run an exact test on what
//! survives.

use nalgebra::{Point3, Vector3};
use vcad_kernel_bounds::{Aabb, RealCoord};

use crate::slab::{invert, ray_entry_with_margin, test_ray};

#[inline]
fn to_f64<T: RealCoord>(v: T) -> f64 {
    T::wide_to_f64(v.widen())
}

fn norm_squared<T: RealCoord>(v: &Vector3<T>) -> f64 {
    let (x, y, z) = (to_f64(v.x), to_f64(v.y), to_f64(v.z));
    x * x + y * y + z * z
}

/// `true` if the box may be touched by the segment from `start` along
/// `dir` for `length` direction lengths.
///
/// Empty boxes never hit.
pub fn test_segment<T: RealCoord>(aabb: &Aabb<T>, start: &Point3<T>, dir: &Vector3<T>, length: T) -> bool {
    if aabb.is_empty() {
        return false;
    }
    let length = to_f64(length);
    test_ray(aabb, start, dir)
        && T::wide_to_f64(aabb.distance_squared(start)) <= norm_squared(dir) * length * length
}

/// [`test_segment`] for the segment between two points.
pub fn test_segment_between<T: RealCoord>(aabb: &Aabb<T>, start: &Point3<T>, end: &Point3<T>) -> bool {
    let dir = Vector3::new(end.x - start.x, end.y - start.y, end.z - start.z);
    test_segment(aabb, start, &dir, T::ONE)
}

/// Segment test for a cone-shaped query: a ray whose radius starts at
/// `radius_at_origin` and grows by `radius_per_unit` per unit of distance.
///
/// The radius is evaluated once, at the projection of the box center onto
/// the ray, and applied as a margin to the slab test. The distance bound is
/// `max_distance` (absolute, not in direction lengths).
///
/// This approximates a true cone/box test. A single radius stands in for
/// the cone's varying width across the box, so large boxes near a steep
/// cone can be reported either way; use it for culling only.
pub fn test_thick_segment<T: RealCoord>(
    aabb: &Aabb<T>,
    start: &Point3<T>,
    dir: &Vector3<T>,
    radius_at_origin: T,
    radius_per_unit: T,
    max_distance: T,
) -> bool {
    if aabb.is_empty() {
        return false;
    }
    let radius = radius_at_box(aabb, start, dir, radius_at_origin, radius_per_unit);
    let max_distance = to_f64(max_distance);
    ray_entry_with_margin(aabb, start, &invert(dir), radius) < T::INFINITY
        && T::wide_to_f64(aabb.distance_squared(start)) <= max_distance * max_distance
}

/// Cone radius where the ray passes the box center, never negative.
fn radius_at_box<T: RealCoord>(
    aabb: &Aabb<T>,
    start: &Point3<T>,
    dir: &Vector3<T>,
    radius_at_origin: T,
    radius_per_unit: T,
) -> T {
    if radius_per_unit == T::ZERO {
        return radius_at_origin.max_of(T::ZERO);
    }
    let center = aabb.center();
    let to_center = Vector3::new(center.x - start.x, center.y - start.y, center.z - start.z);
    let dot = dir.x * to_center.x + dir.y * to_center.y + dir.z * to_center.z;
    let dir_len = (dir.x * dir.x + dir.y * dir.y + dir.z * dir.z).sqrt();
    // Zero direction or unbounded center yields NaN, which max_of drops.
    let along = (dot / dir_len).max_of(T::ZERO);
    (radius_at_origin + along * radius_per_unit).max_of(T::ZERO)
}
