#![warn(missing_docs)]

//! Ray and segment queries against axis-aligned boxes.
//!
//! Two ray/box tests live here:
//!
//! - [`slab`] - the slab method. One reciprocal per axis, then six
//!   multiplies per box; also reports the entry distance. [`Ray`] wraps it
//!   with a cached inverse direction.
//! - [`classify`] - the ray-slope test of Williams et al. Per ray,
//!   [`RayClassifier::set`] precomputes slopes and a direction class; per
//!   box, [`RayClassifier::test`] runs one of 27 division-free predicates.
//!
//! Both accept the same rays and agree on hit/miss away from the
//! degenerate case of a zero direction component with the origin exactly
//! on a face.
//!
//! [`segment`] layers a conservative length bound on the slab test for
//! broad-phase culling of finite segments.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use vcad_kernel_bounds::Aabb;
//! use vcad_kernel_raytrace::{Ray, RayClassifier};
//!
//! let aabb = Aabb::cube(0.0, 10.0);
//! let ray = Ray::new(Point3::new(-5.0, 5.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(ray.entry_distance(&aabb), 5.0);
//!
//! let classifier = RayClassifier::new(ray.origin, ray.direction);
//! assert!(classifier.test(&aabb));
//! ```

pub mod classify;
mod ray;
pub mod segment;
pub mod slab;

pub use classify::{RayClass, RayClassifier, Sign};
pub use ray::Ray;
pub use segment::{test_segment, test_segment_between, test_thick_segment};
pub use slab::{is_ray_intersecting, ray_entry, ray_entry_with_margin, test_ray};
