//! Fallible vector helpers.

use glam::Vec3;

use crate::{GeometryError, GeometryResult};

/// Normalize a vector, reporting an error for zero-length input.
///
/// Wraps [`Vec3::try_normalize`] so call sites can propagate the failure
/// with `?` instead of handling an `Option`.
pub fn try_normalize(v: Vec3) -> GeometryResult<Vec3> {
    v.try_normalize().ok_or(GeometryError::ZeroLengthVector)
}
