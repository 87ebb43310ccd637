//! Degenerate-geometry errors.
//!
//! Every operation in the workspace that could otherwise divide by zero or
//! normalize a zero-length vector reports one of these variants instead of
//! letting NaN/Infinity propagate through the math.

use thiserror::Error;

/// Errors raised by geometry that has collapsed to a degenerate case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("up vector is parallel to the viewing direction")]
    DegenerateUpVector,

    #[error("surface normal has zero length")]
    DegenerateNormal,

    #[error("point lies on the camera focal plane (camera-space z = 0)")]
    FocalPlanePoint,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
