//! The axis-aligned bounding box entity and its set operations.

use std::fmt;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::trace;
use vcad_kernel_math::{Axis, Transform};

use crate::coord::{wide_max, Coord, RealCoord};
use crate::error::{BoundsError, Result};

/// Axis-aligned bounding box in 3D.
///
/// Invariants:
/// - A non-empty box has `min <= max` on every axis.
/// - Emptiness is structural: some axis has `min > max`. [`Aabb::empty`]
///   produces the canonical form (`min = HIGHEST`, `max = LOWEST`), which
///   absorbs any point or box under union.
///
/// Boxes are plain `Copy` values. Operations that combine two boxes come in
/// a value-returning form and an in-place `&mut self` form; both read every
/// operand before writing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb<T: Coord> {
    /// Minimum corner.
    pub min: Point3<T>,
    /// Maximum corner.
    pub max: Point3<T>,
}

impl<T: Coord> Aabb<T> {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        Self { min, max }
    }

    /// Create an AABB from its six bounds.
    pub fn from_bounds(min_x: T, min_y: T, min_z: T, max_x: T, max_y: T, max_z: T) -> Self {
        Self::new(Point3::new(min_x, min_y, min_z), Point3::new(max_x, max_y, max_z))
    }

    /// A box spanning `min..max` on all three axes.
    pub fn cube(min: T, max: T) -> Self {
        Self::from_bounds(min, min, min, max, max, max)
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self::cube(T::HIGHEST, T::LOWEST)
    }

    /// The box covering every representable point.
    pub fn everything() -> Self {
        Self::cube(T::LOWEST, T::HIGHEST)
    }

    /// Smallest box containing all `points`; empty for no points.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<T>>,
    {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// `true` if any axis has `min > max`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Reset to the canonical empty box.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::empty();
        self
    }

    /// Reset to the box covering everything.
    pub fn set_everything(&mut self) -> &mut Self {
        *self = Self::everything();
        self
    }

    /// Copy all six bounds from `other`.
    pub fn set(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Replace the minimum corner.
    pub fn set_min(&mut self, min: Point3<T>) -> &mut Self {
        self.min = min;
        self
    }

    /// Replace the maximum corner.
    pub fn set_max(&mut self, max: Point3<T>) -> &mut Self {
        self.max = max;
        self
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn min_along(&self, axis: Axis) -> T {
        self.min[axis.index()]
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn max_along(&self, axis: Axis) -> T {
        self.max[axis.index()]
    }

    /// Lower bound for an axis index (0 = x, 1 = y, 2 = z).
    pub fn min_on(&self, axis: usize) -> Result<T> {
        Ok(self.min_along(checked_axis(axis)?))
    }

    /// Upper bound for an axis index (0 = x, 1 = y, 2 = z).
    pub fn max_on(&self, axis: usize) -> Result<T> {
        Ok(self.max_along(checked_axis(axis)?))
    }

    /// Overwrite the lower bound for an axis index.
    pub fn set_min_on(&mut self, axis: usize, value: T) -> Result<()> {
        self.min[checked_axis(axis)?.index()] = value;
        Ok(())
    }

    /// Overwrite the upper bound for an axis index.
    pub fn set_max_on(&mut self, axis: usize, value: T) -> Result<()> {
        self.max[checked_axis(axis)?.index()] = value;
        Ok(())
    }

    /// Union of two boxes: min of mins, max of maxes.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_bounds(
            self.min.x.min_of(other.min.x),
            self.min.y.min_of(other.min.y),
            self.min.z.min_of(other.min.z),
            self.max.x.max_of(other.max.x),
            self.max.y.max_of(other.max.y),
            self.max.z.max_of(other.max.z),
        )
    }

    /// Grow this box to contain `other`.
    pub fn union_with(&mut self, other: &Self) -> &mut Self {
        *self = self.union(other);
        self
    }

    /// This box grown to contain `p`.
    pub fn union_point(&self, p: &Point3<T>) -> Self {
        self.union(&Self::new(*p, *p))
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3<T>) -> &mut Self {
        *self = self.union_point(p);
        self
    }

    /// Intersection of two boxes: max of mins, min of maxes.
    ///
    /// Disjoint inputs give a box with `min > max` on some axis; check
    /// [`Aabb::is_empty`] before using the result as a region.
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_bounds(
            self.min.x.max_of(other.min.x),
            self.min.y.max_of(other.min.y),
            self.min.z.max_of(other.min.z),
            self.max.x.min_of(other.max.x),
            self.max.y.min_of(other.max.y),
            self.max.z.min_of(other.max.z),
        )
    }

    /// Shrink this box to its intersection with `other`.
    pub fn intersect_with(&mut self, other: &Self) -> &mut Self {
        *self = self.intersection(other);
        self
    }

    /// Test if a point lies inside the box (faces included).
    pub fn test_point(&self, p: &Point3<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn test_aabb(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Volume of the overlap of two boxes; zero when they are disjoint.
    ///
    /// Computed in [`Coord::Wide`] so large integer boxes do not overflow.
    pub fn intersection_volume(&self, other: &Self) -> T::Wide {
        let overlap = |a_min: T, a_max: T, b_min: T, b_max: T| {
            let d = a_max.min_of(b_max).widen() - a_min.max_of(b_min).widen();
            wide_max(d, T::WIDE_ZERO)
        };
        overlap(self.min.x, self.max.x, other.min.x, other.max.x)
            * overlap(self.min.y, self.max.y, other.min.y, other.max.y)
            * overlap(self.min.z, self.max.z, other.min.z, other.max.z)
    }

    /// Squared distance from `p` to the closest point of the box.
    ///
    /// Zero when `p` is inside or on the boundary.
    pub fn distance_squared(&self, p: &Point3<T>) -> T::Wide {
        let gap = |lo: T, hi: T, v: T| {
            let (lo, hi, v) = (lo.widen(), hi.widen(), v.widen());
            wide_max(wide_max(lo - v, v - hi), T::WIDE_ZERO)
        };
        let dx = gap(self.min.x, self.max.x, p.x);
        let dy = gap(self.min.y, self.max.y, p.y);
        let dz = gap(self.min.z, self.max.z, p.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Distance from `p` to the closest point of the box.
    pub fn distance(&self, p: &Point3<T>) -> f64 {
        T::wide_to_f64(self.distance_squared(p)).sqrt()
    }

    /// Grow every face outward by `r` (inward for negative `r`).
    ///
    /// Not guarded: a large negative margin inverts the box, which then
    /// reads as empty.
    pub fn add_margin(&mut self, r: T) -> &mut Self {
        self.min.x = self.min.x - r;
        self.min.y = self.min.y - r;
        self.min.z = self.min.z - r;
        self.max.x = self.max.x + r;
        self.max.y = self.max.y + r;
        self.max.z = self.max.z + r;
        self
    }

    /// Multiply the bounds of each axis by a per-axis factor.
    pub fn scale(&mut self, sx: T, sy: T, sz: T) -> &mut Self {
        self.min.x = self.min.x * sx;
        self.min.y = self.min.y * sy;
        self.min.z = self.min.z * sz;
        self.max.x = self.max.x * sx;
        self.max.y = self.max.y * sy;
        self.max.z = self.max.z * sz;
        self
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point3<T> {
        Point3::new(
            T::halfway(self.min.x, self.max.x),
            T::halfway(self.min.y, self.max.y),
            T::halfway(self.min.z, self.max.z),
        )
    }

    /// Side lengths (`max - min`); zero for an empty box.
    pub fn extents(&self) -> Vector3<T> {
        if self.is_empty() {
            return Vector3::new(T::ZERO, T::ZERO, T::ZERO);
        }
        Vector3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Volume of the box; zero for an empty box.
    pub fn volume(&self) -> T::Wide {
        if self.is_empty() {
            return T::WIDE_ZERO;
        }
        let side = |lo: T, hi: T| hi.widen() - lo.widen();
        side(self.min.x, self.max.x) * side(self.min.y, self.max.y) * side(self.min.z, self.max.z)
    }

    /// The longest axis. Ties go to the lower index.
    pub fn max_dim(&self) -> Axis {
        let side = |lo: T, hi: T| hi.widen() - lo.widen();
        let dx = side(self.min.x, self.max.x);
        let dy = side(self.min.y, self.max.y);
        let dz = side(self.min.z, self.max.z);
        if dx >= dy && dx >= dz {
            Axis::X
        } else if dy >= dz {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

impl<T: RealCoord> Aabb<T> {
    /// Ray parameter at which a point moving along `dir` from `pos` has
    /// crossed every entry face of the box.
    ///
    /// Per axis the face facing the motion is picked by the sign of `dir`.
    /// A zero component divides to a signed infinity, so an axis the point
    /// never crosses dominates the result.
    pub fn collide_front(&self, pos: &Point3<T>, dir: &Vector3<T>) -> T {
        let entry = |lo: T, hi: T, p: T, d: T| {
            let face = if d < T::ZERO { hi } else { lo };
            (face - p) / d
        };
        entry(self.min.x, self.max.x, pos.x, dir.x)
            .max_of(entry(self.min.y, self.max.y, pos.y, dir.y))
            .max_of(entry(self.min.z, self.max.z, pos.z, dir.z))
    }

    /// Ray parameter at which a point moving along `dir` from `pos` first
    /// reaches an exit face of the box. See [`Aabb::collide_front`].
    ///
    /// A zero component picks the same side as a positive one, so a
    /// straddled axis gives `+inf` here and `-inf` in `collide_front`.
    pub fn collide_back(&self, pos: &Point3<T>, dir: &Vector3<T>) -> T {
        let exit = |lo: T, hi: T, p: T, d: T| {
            let face = if d < T::ZERO { lo } else { hi };
            (face - p) / d
        };
        exit(self.min.x, self.max.x, pos.x, dir.x)
            .min_of(exit(self.min.y, self.max.y, pos.y, dir.y))
            .min_of(exit(self.min.z, self.max.z, pos.z, dir.z))
    }
}

impl Aabb<f64> {
    /// Bounds of this box after an affine transform.
    ///
    /// The center goes through the full transform; the half extents go
    /// through the entry-wise absolute value of the linear part (Arvo).
    /// The result bounds the eight transformed corners tightly. An empty box
    /// stays empty.
    pub fn transformed(&self, transform: &Transform) -> Self {
        if self.is_empty() {
            trace!("transforming empty box; result stays empty");
            return Self::empty();
        }
        let center = transform.apply_point(&self.center());
        let half = transform.linear.abs() * (self.extents() * 0.5);
        Self::new(center - half, center + half)
    }

    /// Transform this box, then union the result with `base`.
    ///
    /// An empty source contributes nothing, so `base` comes back unchanged.
    pub fn transform_union(&self, transform: &Transform, base: &Self) -> Self {
        if self.is_empty() {
            return *base;
        }
        self.transformed(transform).union(base)
    }
}

impl<T: Coord> Default for Aabb<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Coord + fmt::Display> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})-({},{},{})",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

impl From<Aabb<f32>> for Aabb<f64> {
    fn from(b: Aabb<f32>) -> Self {
        Self::from_bounds(
            f64::from(b.min.x),
            f64::from(b.min.y),
            f64::from(b.min.z),
            f64::from(b.max.x),
            f64::from(b.max.y),
            f64::from(b.max.z),
        )
    }
}

impl From<Aabb<i32>> for Aabb<f64> {
    fn from(b: Aabb<i32>) -> Self {
        // Integer sentinels are finite; map them to the real ones.
        if b.is_empty() {
            return Self::empty();
        }
        Self::from_bounds(
            f64::from(b.min.x),
            f64::from(b.min.y),
            f64::from(b.min.z),
            f64::from(b.max.x),
            f64::from(b.max.y),
            f64::from(b.max.z),
        )
    }
}

fn checked_axis(axis: usize) -> Result<Axis> {
    Axis::from_index(axis).ok_or(BoundsError::AxisOutOfRange { axis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ibox(min: i32, max: i32) -> Aabb<i32> {
        Aabb::cube(min, max)
    }

    #[test]
    fn test_union_and_intersection_example() {
        let a = ibox(0, 4);
        let b = ibox(2, 6);
        assert_eq!(a.union(&b), ibox(0, 6));
        assert_eq!(a.intersection(&b), ibox(2, 4));
        assert_eq!(a.intersection_volume(&b), 8);
    }

    #[test]
    fn test_set_operations_are_symmetric() {
        let boxes = [
            Aabb::from_bounds(0, 0, 0, 4, 4, 4),
            Aabb::from_bounds(2, -3, 1, 6, 2, 9),
            Aabb::from_bounds(10, 10, 10, 12, 11, 13),
            Aabb::from_bounds(4, 4, 4, 5, 5, 5),
            Aabb::empty(),
        ];
        for a in &boxes {
            assert_eq!(a.union(a), *a);
            for b in &boxes {
                assert_eq!(a.union(b), b.union(a));
                assert_eq!(a.intersection(b), b.intersection(a));
                assert_eq!(a.test_aabb(b), b.test_aabb(a));
            }
        }
    }

    #[test]
    fn test_in_place_union_matches_value_union() {
        let a = Aabb::from_bounds(0.0, 1.0, 2.0, 3.0, 4.0, 5.0);
        let b = Aabb::from_bounds(-1.0, 2.0, 0.0, 1.0, 8.0, 3.0);
        let mut c = a;
        c.union_with(&b);
        assert_eq!(c, a.union(&b));
        let mut d = a;
        let snapshot = d;
        d.union_with(&snapshot);
        assert_eq!(d, a);
        let mut e = a;
        e.intersect_with(&b);
        assert_eq!(e, a.intersection(&b));
    }

    #[test]
    fn test_empty_absorbs_union() {
        let mut aabb = Aabb::<f64>::empty();
        assert!(aabb.is_empty());
        aabb.include_point(&Point3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, aabb.max);
        aabb.include_point(&Point3::new(-1.0, 5.0, 3.0));
        assert_eq!(aabb, Aabb::from_bounds(-1.0, 2.0, 3.0, 1.0, 5.0, 3.0));
        aabb.clear();
        assert_eq!(aabb, Aabb::empty());
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let a = ibox(0, 2);
        let b = Aabb::from_bounds(0, 5, 0, 2, 7, 2);
        assert!(!a.test_aabb(&b));
        // Only the y axis inverts.
        let i = a.intersection(&b);
        assert!(i.is_empty());
        assert_eq!(i.volume(), 0);
        assert_eq!(a.intersection_volume(&b), 0);
    }

    #[test]
    fn test_touching_boxes_overlap() {
        let a = ibox(0, 10);
        let b = Aabb::from_bounds(10, 0, 0, 20, 10, 10);
        assert!(a.test_aabb(&b));
        assert_eq!(a.intersection_volume(&b), 0);
        assert!(a.test_point(&Point3::new(10, 10, 0)));
        assert!(!a.test_point(&Point3::new(11, 10, 0)));
    }

    #[test]
    fn test_intersection_volume_matches_voxel_count() {
        let boxes = [
            Aabb::from_bounds(0, 0, 0, 3, 2, 4),
            Aabb::from_bounds(1, -1, 2, 5, 1, 3),
            Aabb::from_bounds(-2, 1, 0, 1, 3, 5),
            Aabb::from_bounds(2, 2, 2, 2, 4, 4),
            Aabb::from_bounds(4, 0, 0, 6, 2, 2),
        ];
        for a in &boxes {
            for b in &boxes {
                let mut voxels = 0_i128;
                for x in -3..7 {
                    for y in -3..7 {
                        for z in -3..7 {
                            let inside = |c: &Aabb<i32>| {
                                x >= c.min.x
                                    && x < c.max.x
                                    && y >= c.min.y
                                    && y < c.max.y
                                    && z >= c.min.z
                                    && z < c.max.z
                            };
                            if inside(a) && inside(b) {
                                voxels += 1;
                            }
                        }
                    }
                }
                assert_eq!(a.intersection_volume(b), voxels, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_intersection_volume_large_integers() {
        let a = Aabb::cube(i32::MIN / 2, i32::MAX / 2);
        let side = i128::from(i32::MAX / 2) - i128::from(i32::MIN / 2);
        assert_eq!(a.intersection_volume(&a), side * side * side);
        assert_eq!(a.volume(), side * side * side);
    }

    #[test]
    fn test_i64_extremes_do_not_overflow() {
        let all = Aabb::<i64>::everything();
        assert_eq!(all.volume(), 2f64.powi(192));
        assert_eq!(all.intersection_volume(&all), 2f64.powi(192));

        let big = Aabb::<i64>::cube(0, 1 << 50);
        assert_eq!(big.volume(), 2f64.powi(150));
        assert_eq!(big.intersection_volume(&big), 2f64.powi(150));

        let unit = Aabb::<i64>::cube(0, 1);
        let far = Point3::new(i64::MAX, i64::MAX, i64::MAX);
        let d = unit.distance_squared(&far);
        assert!(d.is_finite());
        assert_relative_eq!(d, 3.0 * 2f64.powi(126));
        assert_eq!(unit.volume(), 1.0);
    }

    #[test]
    fn test_distance_zero_inside_and_on_boundary() {
        let aabb = Aabb::cube(0.0, 10.0);
        assert_eq!(aabb.distance_squared(&Point3::new(5.0, 5.0, 5.0)), 0.0);
        assert_eq!(aabb.distance_squared(&Point3::new(10.0, 0.0, 5.0)), 0.0);
        assert!(aabb.distance_squared(&Point3::new(10.001, 0.0, 5.0)) > 0.0);
        assert_relative_eq!(aabb.distance(&Point3::new(13.0, 14.0, 5.0)), 5.0);
    }

    #[test]
    fn test_distance_grows_moving_away() {
        let aabb = Aabb::<i32>::from_bounds(0, 0, 0, 4, 4, 4);
        let mut last: i128 = 0;
        for step in 0..20 {
            let d = aabb.distance_squared(&Point3::new(2, 4 + step, 2));
            assert!(d >= last);
            last = d;
        }
        assert_eq!(last, 19 * 19);
    }

    #[test]
    fn test_margin_round_trip() {
        let mut a = Aabb::from_bounds(-3, 1, 2, 5, 7, 9);
        let orig = a;
        a.add_margin(4);
        assert_eq!(a, Aabb::from_bounds(-7, -3, -2, 9, 11, 13));
        a.add_margin(-4);
        assert_eq!(a, orig);

        let mut r = Aabb::from_bounds(0.1, 0.2, 0.3, 1.7, 2.9, 3.3);
        let orig = r;
        r.add_margin(0.37);
        r.add_margin(-0.37);
        assert_relative_eq!(r.min, orig.min, epsilon = 1e-12);
        assert_relative_eq!(r.max, orig.max, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_margin_inverts() {
        let mut a = ibox(0, 2);
        a.add_margin(-2);
        assert!(a.is_empty());
    }

    #[test]
    fn test_derived_quantities() {
        let a = Aabb::from_bounds(0.0, 0.0, 0.0, 2.0, 4.0, 6.0);
        assert_eq!(a.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a.extents(), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.volume(), 48.0);
        assert_eq!(a.max_dim(), Axis::Z);
        assert_eq!(Aabb::<f64>::empty().volume(), 0.0);
        assert_eq!(Aabb::<i32>::empty().extents(), Vector3::zeros());
        assert_eq!(ibox(3, 3).max_dim(), Axis::X);
    }

    #[test]
    fn test_scale() {
        let mut a = Aabb::from_bounds(1, 1, 1, 2, 3, 4);
        a.scale(2, 3, 4);
        assert_eq!(a, Aabb::from_bounds(2, 3, 4, 4, 9, 16));
    }

    #[test]
    fn test_axis_accessors() {
        let mut a = Aabb::from_bounds(1, 2, 3, 4, 5, 6);
        assert_eq!(a.min_on(1), Ok(2));
        assert_eq!(a.max_on(2), Ok(6));
        assert_eq!(a.min_on(3), Err(BoundsError::AxisOutOfRange { axis: 3 }));
        assert!(a.set_max_on(7, 0).is_err());
        a.set_min_on(0, -1).unwrap();
        assert_eq!(a.min_along(Axis::X), -1);
        assert_eq!(
            BoundsError::AxisOutOfRange { axis: 9 }.to_string(),
            "axis index 9 out of range (expected 0, 1 or 2)"
        );
    }

    #[test]
    fn test_collide_front_and_back() {
        let aabb = Aabb::cube(0.0, 10.0);
        let pos = Point3::new(-5.0, 5.0, 5.0);
        let dir = Vector3::new(1.0, 0.5, 0.0);
        assert_relative_eq!(aabb.collide_front(&pos, &dir), 5.0);
        assert_relative_eq!(aabb.collide_back(&pos, &dir), 10.0);

        // y is not straddled and dir.y == 0: one of the two times goes
        // infinite and front ends up past back.
        let flat = Vector3::new(1.0, 0.0, 0.0);
        let below = Point3::new(-5.0, -20.0, 5.0);
        assert_eq!(aabb.collide_front(&below, &flat), f64::INFINITY);
        assert_relative_eq!(aabb.collide_back(&below, &flat), 15.0);
        let above = Point3::new(-5.0, 20.0, 5.0);
        assert_relative_eq!(aabb.collide_front(&above, &flat), 5.0);
        assert_eq!(aabb.collide_back(&above, &flat), f64::NEG_INFINITY);
    }

    #[test]
    fn test_transformed_rotation() {
        let aabb = Aabb::from_bounds(0.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        let rot = Transform::rotation(Axis::Z, std::f64::consts::FRAC_PI_2);
        let out = aabb.transformed(&Transform::translation(1.0, 0.0, 0.0).then(&rot));
        assert_relative_eq!(out.min, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out.max, Point3::new(1.0, 2.0, 1.0), epsilon = 1e-12);
        assert!(Aabb::<f64>::empty().transformed(&rot).is_empty());
    }

    #[test]
    fn test_transformed_bounds_transformed_corners() {
        let aabb = Aabb::from_bounds(-1.0, 2.0, 0.5, 3.0, 4.0, 1.5);
        let t = Transform::translation(0.5, -2.0, 7.0)
            .then(&Transform::rotation(Axis::X, 0.3))
            .then(&Transform::rotation(Axis::Y, -1.1));
        let corners: Vec<_> = (0..8)
            .map(|i| {
                let pick = |bit: usize, axis: usize| {
                    if i & bit == 0 {
                        aabb.min[axis]
                    } else {
                        aabb.max[axis]
                    }
                };
                t.apply_point(&Point3::new(pick(1, 0), pick(2, 1), pick(4, 2)))
            })
            .collect();
        let expected = Aabb::from_points(&corners);
        let out = aabb.transformed(&t);
        assert_relative_eq!(out.min, expected.min, epsilon = 1e-12);
        assert_relative_eq!(out.max, expected.max, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_union() {
        let base = Aabb::cube(0.0, 1.0);
        let src = Aabb::cube(0.0, 1.0);
        let out = src.transform_union(&Transform::translation(5.0, 0.0, 0.0), &base);
        assert_eq!(out, Aabb::from_bounds(0.0, 0.0, 0.0, 6.0, 1.0, 1.0));
        assert_eq!(Aabb::empty().transform_union(&Transform::identity(), &base), base);
    }

    #[test]
    fn test_conversions_and_display() {
        let f = Aabb::<f32>::from_bounds(0.5, 1.0, 1.5, 2.0, 2.5, 3.0);
        let d: Aabb<f64> = f.into();
        assert_eq!(d, Aabb::from_bounds(0.5, 1.0, 1.5, 2.0, 2.5, 3.0));
        assert_eq!(Aabb::<f64>::from(Aabb::<i32>::empty()), Aabb::empty());
        assert_eq!(ibox(0, 4).to_string(), "(0,0,0)-(4,4,4)");
    }

    #[test]
    fn test_from_points() {
        let pts = [Point3::new(1, 5, 2), Point3::new(-1, 0, 8), Point3::new(3, 2, 2)];
        assert_eq!(Aabb::from_points(&pts), Aabb::from_bounds(-1, 0, 2, 3, 5, 8));
        assert!(Aabb::<i32>::from_points(&[]).is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let a = Aabb::from_bounds(0.0, 1.0, 2.0, 3.0, 4.0, 5.0);
        let json = serde_json::to_string(&a).unwrap();
        let back: Aabb<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
