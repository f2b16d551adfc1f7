//! Slab-method ray/box tests.
//!
//! Rays are half-lines `origin + t * dir` with `t >= 0`. Callers pass the
//! per-axis inverse direction so one division per ray serves many boxes.
//! A zero direction component inverts to a signed infinity and that axis
//! stops constraining `t`; no branch is taken for it.

use nalgebra::{Point3, Vector3};
use vcad_kernel_bounds::{Aabb, RealCoord};

/// Entry and exit parameters of one axis slab, in increasing order.
#[inline]
fn slab<T: RealCoord>(lo: T, hi: T, o: T, inv: T) -> (T, T) {
    let t0 = (lo - o) * inv;
    let t1 = (hi - o) * inv;
    (t0.min_of(t1), t0.max_of(t1))
}

/// Parameter interval `(entry, exit)` the ray spends inside the box grown
/// by `margin`, or `None` on a miss.
///
/// `entry` is clamped to zero, so an origin inside the box enters at 0.
/// A box that is empty after applying the margin never hits; its inverted
/// bounds would otherwise read as an ordinary slab.
pub(crate) fn slab_interval<T: RealCoord>(
    aabb: &Aabb<T>,
    origin: &Point3<T>,
    inv_dir: &Vector3<T>,
    margin: T,
) -> Option<(T, T)> {
    let lo = Point3::new(aabb.min.x - margin, aabb.min.y - margin, aabb.min.z - margin);
    let hi = Point3::new(aabb.max.x + margin, aabb.max.y + margin, aabb.max.z + margin);
    if lo.x > hi.x || lo.y > hi.y || lo.z > hi.z {
        return None;
    }

    let (near_x, far_x) = slab(lo.x, hi.x, origin.x, inv_dir.x);
    let (near_y, far_y) = slab(lo.y, hi.y, origin.y, inv_dir.y);
    let (near_z, far_z) = slab(lo.z, hi.z, origin.z, inv_dir.z);

    let near = T::ZERO.max_of(near_x).max_of(near_y).max_of(near_z);
    let far = T::INFINITY.min_of(far_x).min_of(far_y).min_of(far_z);
    (far >= near).then_some((near, far))
}

/// Distance along the ray at which it enters the box, `+inf` on a miss.
///
/// Distances are in units of the direction's length. Zero when the origin
/// is inside the box. Faces count as hits.
#[inline]
pub fn ray_entry<T: RealCoord>(aabb: &Aabb<T>, origin: &Point3<T>, inv_dir: &Vector3<T>) -> T {
    ray_entry_with_margin(aabb, origin, inv_dir, T::ZERO)
}

/// [`ray_entry`] against the box grown by `margin` on every face.
///
/// The box itself is not modified. A negative margin shrinks it.
pub fn ray_entry_with_margin<T: RealCoord>(
    aabb: &Aabb<T>,
    origin: &Point3<T>,
    inv_dir: &Vector3<T>,
    margin: T,
) -> T {
    match slab_interval(aabb, origin, inv_dir, margin) {
        Some((entry, _)) => entry,
        None => T::INFINITY,
    }
}

/// `true` if the ray enters the box strictly before `max_distance`.
#[inline]
pub fn is_ray_intersecting<T: RealCoord>(
    aabb: &Aabb<T>,
    origin: &Point3<T>,
    inv_dir: &Vector3<T>,
    max_distance: T,
) -> bool {
    ray_entry(aabb, origin, inv_dir) < max_distance
}

/// Unbounded half-line test taking the direction itself.
pub fn test_ray<T: RealCoord>(aabb: &Aabb<T>, origin: &Point3<T>, dir: &Vector3<T>) -> bool {
    is_ray_intersecting(aabb, origin, &invert(dir), T::INFINITY)
}

/// Component-wise reciprocal.
#[inline]
pub(crate) fn invert<T: RealCoord>(dir: &Vector3<T>) -> Vector3<T> {
    Vector3::new(T::ONE / dir.x, T::ONE / dir.y, T::ONE / dir.z)
}
