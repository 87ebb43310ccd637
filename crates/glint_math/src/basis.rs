//! Orthonormal camera basis construction.

use glam::{Mat3, Vec3};

use crate::{try_normalize, GeometryError, GeometryResult};

/// Right-handed orthonormal basis built from a view direction and an up hint.
///
/// `forward` points from the eye towards the point of interest; `up` only
/// hints at the vertical and need not be orthogonal to `forward`. The true
/// up axis is recomputed so the three axes are mutually orthogonal unit
/// vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Basis {
    /// Build the basis: forward = normalize(forward), right = normalize(up × forward),
    /// up = forward × right.
    ///
    /// Fails if `forward` has zero length, or if `up` is parallel to the
    /// viewing direction (their cross product cannot be normalized).
    pub fn from_forward_up(forward: Vec3, up: Vec3) -> GeometryResult<Self> {
        let w = try_normalize(forward)?;
        let u = up
            .cross(w)
            .try_normalize()
            .ok_or(GeometryError::DegenerateUpVector)?;
        // w and u are orthonormal, so no renormalization needed here
        let v = w.cross(u);

        Ok(Self {
            right: u,
            up: v,
            forward: w,
        })
    }

    /// Rotation taking world coordinates into this basis.
    ///
    /// The columns of the basis-to-world rotation are the three axes, so the
    /// inverse (transpose, the matrix is orthonormal) maps world to basis.
    pub fn world_to_basis(&self) -> Mat3 {
        Mat3::from_cols(self.right, self.up, self.forward).transpose()
    }
}
