//! Camera transform pipeline: world -> camera -> image plane -> pixels.

use glint_math::{Basis, GeometryError, GeometryResult, Mat3, Mat4, Vec3, Vec4};

/// Camera mapping homogeneous world points to pixel coordinates with depth.
///
/// Owns three independently configured matrices:
///
/// - `world_to_camera`: 4x4 affine pose (orthonormal rotation block plus
///   translation), written by [`set_look_at`](Self::set_look_at);
/// - `projection`: 3x4 pinhole projection dropping the homogeneous
///   coordinate, written by [`set_projection`](Self::set_projection)
///   (stored in the top three rows of a `Mat4` whose fourth row is zero);
/// - `calibration`: 3x3 focal-length / principal-point mapping from the
///   normalized image plane to pixels, written by
///   [`set_calibration`](Self::set_calibration).
///
/// The pipeline is configure-then-query: each setter fully overwrites its
/// matrix, and queries on a default-constructed camera apply the identity
/// pose and a zero projection, which is well-formed but meaningless.
/// Perspective division happens in [`project_point`](Self::project_point),
/// not in the matrices.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    world_to_camera: Mat4,
    projection: Mat4,
    calibration: Mat3,
}

impl Camera {
    /// Create a camera with identity pose and calibration and a zero
    /// projection.
    pub fn new() -> Self {
        Self {
            world_to_camera: Mat4::IDENTITY,
            projection: Mat4::ZERO,
            calibration: Mat3::IDENTITY,
        }
    }

    /// Set the camera pose from an eye position, a point of interest and an
    /// up hint.
    ///
    /// The rotation block becomes the transpose of the camera basis
    /// (columns right/up/forward per [`Basis`]), the translation becomes
    /// `-R * eye`, and the bottom row stays `[0, 0, 0, 1]`.
    ///
    /// Fails if `interest_point` coincides with `eye` or if `up` is parallel
    /// to the viewing direction.
    pub fn set_look_at(&mut self, eye: Vec3, interest_point: Vec3, up: Vec3) -> GeometryResult<()> {
        let basis = Basis::from_forward_up(interest_point - eye, up)?;

        let r = basis.world_to_basis();
        let t = -(r * eye);

        let mut m = Mat4::from_mat3(r);
        m.w_axis = t.extend(1.0);
        self.world_to_camera = m;

        log::debug!("world-to-camera matrix: {:?}", self.world_to_camera);
        Ok(())
    }

    /// Set the canonical pinhole projection: ones on the diagonal of the
    /// 3x4 matrix, so a camera-space homogeneous point maps to its first
    /// three coordinates and the third component is the camera-space depth.
    pub fn set_projection(&mut self) {
        self.projection = Mat4::from_diagonal(Vec4::new(1.0, 1.0, 1.0, 0.0));

        log::debug!("projection matrix: {:?}", self.projection);
    }

    /// Set the calibration matrix for the given focal length and image
    /// size: focal length on the diagonal, principal point at the image
    /// center.
    pub fn set_calibration(&mut self, focal_length: f32, width: f32, height: f32) {
        let mut k = Mat3::IDENTITY;
        k.x_axis.x = focal_length;
        k.y_axis.y = focal_length;
        k.z_axis.x = width / 2.0;
        k.z_axis.y = height / 2.0;
        k.z_axis.z = 1.0;
        self.calibration = k;

        log::debug!("calibration matrix: {:?}", self.calibration);
    }

    /// Project a homogeneous world point onto the screen.
    ///
    /// Applies `calibration * projection * world_to_camera`, then divides
    /// the x and y components by the camera-space depth. The result carries
    /// pixel coordinates in x and y and the camera-space depth in z.
    ///
    /// Fails with [`GeometryError::FocalPlanePoint`] when the point lands
    /// on the camera's focal plane (depth zero), where the perspective
    /// division is undefined.
    pub fn project_point(&self, p: Vec4) -> GeometryResult<Vec3> {
        let ps = self.calibration * (self.projection * (self.world_to_camera * p)).truncate();

        if ps.z == 0.0 {
            return Err(GeometryError::FocalPlanePoint);
        }

        Ok(Vec3::new(ps.x / ps.z, ps.y / ps.z, ps.z))
    }

    /// Transform a direction vector from world to camera coordinates.
    ///
    /// Applies only the rotation block of the pose, which is correct for
    /// directions (normals, ray directions) but not positions. The rotation
    /// is orthonormal, so lengths are preserved.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        Mat3::from_mat4(self.world_to_camera) * v
    }

    /// Get the world-to-camera pose matrix.
    pub fn world_to_camera(&self) -> Mat4 {
        self.world_to_camera
    }

    /// Get the calibration matrix.
    pub fn calibration(&self) -> Mat3 {
        self.calibration
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
