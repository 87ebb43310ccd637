//! Glint render core - per-point shading and camera projection.
//!
//! The numeric heart of a minimal software renderer:
//!
//! - **`LightSet`**: accumulates ambient and point light contributions at a
//!   surface point under either a Gouraud-style or a Phong-style local
//!   illumination model.
//! - **`Camera`**: look-at / projection / calibration matrix pipeline that
//!   maps homogeneous world points to pixel coordinates with depth.
//! - **`Texture`**: nearest-neighbour texture sampling for base colors.
//!
//! The two main components are independent; a renderer composes them by
//! shading a world point with `LightSet` and locating it on screen with
//! `Camera`. All shared state is plain in-memory data: concurrent read-only
//! use is fine, mutation must not race with in-flight queries.

mod camera;
mod light;
mod material;
mod texture;

pub use camera::Camera;
pub use light::{Light, LightSet};
pub use material::{Color, Material};
pub use texture::{Texture, TextureError, TextureResult};

/// Re-export commonly used math types
pub use glint_math::{GeometryError, GeometryResult, Mat3, Mat4, Vec3, Vec4};
