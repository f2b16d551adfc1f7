#![warn(missing_docs)]

//! Axis-aligned bounding boxes for the vcad kernel.
//!
//! [`Aabb`] is generic over its coordinate type so integer (voxel/grid) and
//! real (world-space) boxes share one implementation. Geometry is usually
//! accumulated into boxes with [`Aabb::include_point`] and
//! [`Aabb::union_with`] while a scene loads, then queried with overlap and
//! distance tests.
//!
//! Empty boxes are represented structurally (`min > max` on some axis) and
//! detected with [`Aabb::is_empty`]; no operation here returns an error for
//! geometric reasons.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use vcad_kernel_bounds::Aabb;
//!
//! let a = Aabb::from_bounds(0, 0, 0, 4, 4, 4);
//! let b = Aabb::from_bounds(2, 2, 2, 6, 6, 6);
//! assert_eq!(a.union(&b), Aabb::from_bounds(0, 0, 0, 6, 6, 6));
//! assert_eq!(a.intersection_volume(&b), 8_i128);
//! assert!(a.test_point(&Point3::new(4, 0, 2)));
//! ```

pub mod aabb;
pub mod coord;
pub mod error;

pub use aabb::Aabb;
pub use coord::{Coord, RealCoord};
pub use error::{BoundsError, Result};
