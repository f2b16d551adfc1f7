//! Error types for bounding-box accessors.

use thiserror::Error;

/// Errors raised by bounding-box operations.
///
/// Geometric edge cases (empty boxes, disjoint inputs) are not errors; they
/// are reported through [`Aabb::is_empty`](crate::Aabb::is_empty). Only
/// programmer mistakes end up here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// Axis index outside `0..3`.
    #[error("axis index {axis} out of range (expected 0, 1 or 2)")]
    AxisOutOfRange {
        /// The offending index.
        axis: usize,
    },
}

/// Result type for bounding-box operations.
pub type Result<T> = std::result::Result<T, BoundsError>;
