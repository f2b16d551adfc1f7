#![warn(missing_docs)]

//! Math types for the vcad bounds kernel.
//!
//! Thin wrappers around nalgebra: coordinate axes and affine transforms.
//! Nothing in here knows about boxes or rays; the bounds and raytrace
//! crates build on top.

use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis (index 0).
    X,
    /// The Y axis (index 1).
    Y,
    /// The Z axis (index 2).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis for a component index, or `None` outside `0..3`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
}

/// An affine transform: a 3x3 linear part followed by a translation.
///
/// This is the 4x3 layout scene graphs hand to bounds code; there is no
/// projective row, so transformed boxes stay boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Rotation / scale / shear part.
    pub linear: Matrix3<f64>,
    /// Translation applied after `linear`.
    pub translation: Vector3<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            linear: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            linear: Matrix3::identity(),
            translation: Vector3::new(dx, dy, dz),
        }
    }

    /// Rotation about a coordinate axis by `angle` radians.
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let linear = match axis {
            Axis::X => Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
            Axis::Y => Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
            Axis::Z => Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        };
        Self {
            linear,
            translation: Vector3::zeros(),
        }
    }

    /// Compose: apply `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    /// Transform a point.
    #[inline]
    pub fn apply_point(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.linear * p.coords + self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_axis_index_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }

    #[test]
    fn test_translation_moves_points() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Point3::new(11.0, 22.0, 33.0));
        assert_eq!(Transform::default().apply_point(&p), p);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let t = Transform::rotation(Axis::Z, FRAC_PI_2);
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_then_applies_right_operand_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let rotate = Transform::rotation(Axis::Z, FRAC_PI_2);
        // (0,0,0) -> translate -> (1,0,0) -> rotate -> (0,1,0)
        let p = rotate.then(&translate).apply_point(&Point3::origin());
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        // (0,0,0) -> rotate -> (0,0,0) -> translate -> (1,0,0)
        let q = translate.then(&rotate).apply_point(&Point3::origin());
        assert_relative_eq!(q, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}
