//! Texture loading and sampling for base colors.
//!
//! Provides the `sample(u, v)` capability the shading code composes with:
//! nearest-neighbour lookup with u and v wrapped into [0, 1).

use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::material::Color;

/// Errors that can occur while loading a texture.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture: {0}")]
    Load(String),

    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("texture has zero width or height")]
    EmptyImage,
}

pub type TextureResult<T> = Result<T, TextureError>;

/// An image sampled as a repeating 2D texture.
///
/// Pixels are stored as linear RGB floats in [0, 1], row-major with the
/// first row at the top of the image.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Texture {
    /// Create a texture from raw pixel data.
    ///
    /// `pixels` must hold `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>) -> TextureResult<Self> {
        if width == 0 || height == 0 {
            return Err(TextureError::EmptyImage);
        }
        if pixels.len() != (width * height) as usize {
            return Err(TextureError::Load(format!(
                "expected {} pixels, got {}",
                width * height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a 1x1 solid color texture.
    pub fn solid_color(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    /// Load a texture from an image file.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| TextureError::Load(format!("{}: {}", path.display(), e)))?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels: Vec<Vec3> = rgb
            .pixels()
            .map(|p| {
                Vec3::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        log::debug!("loaded texture {} ({}x{})", path.display(), width, height);

        Self::new(width, height, pixels)
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample the texture at (u, v) with nearest-neighbour lookup.
    ///
    /// Coordinates are wrapped into [0, 1), so the texture repeats in both
    /// directions and negative coordinates are valid.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let x = (u.rem_euclid(1.0) * self.width as f32) as u32 % self.width;
        let y = (v.rem_euclid(1.0) * self.height as f32) as u32 % self.height;
        self.pixels[(y * self.width + x) as usize]
    }
}
