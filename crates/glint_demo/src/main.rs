//! Shade-and-project demo.
//!
//! Lights a ring of points on a unit sphere with both illumination models
//! and projects each point to pixel coordinates, printing the results as a
//! table. This is the composition the core crates are built for: the caller
//! hands the camera position to the light set for the specular terms and
//! uses the camera to place the shaded point on screen.

use anyhow::Result;
use glint_math::Vec3;
use glint_render::{Camera, Color, LightSet, Material, Texture};

const IMAGE_WIDTH: f32 = 640.0;
const IMAGE_HEIGHT: f32 = 480.0;
const FOCAL_LENGTH: f32 = 500.0;

fn main() -> Result<()> {
    env_logger::init();

    println!("Glint - shading and projection demo");
    println!("===================================");

    let eye = Vec3::new(0.0, 1.5, 4.0);

    let mut camera = Camera::new();
    camera.set_look_at(eye, Vec3::ZERO, Vec3::Y)?;
    camera.set_projection();
    camera.set_calibration(FOCAL_LENGTH, IMAGE_WIDTH, IMAGE_HEIGHT);

    let mut lights = LightSet::new();
    lights.add_ambient(0.15);
    lights.add_point(Vec3::new(3.0, 3.0, 2.0), 0.9);
    lights.add_point(Vec3::new(-2.0, 1.0, 3.0), 0.4);
    log::info!("scene has {} lights", lights.len());

    let material = Material::new(1.0, 0.8, 0.5, 20.0);
    let texture = Texture::solid_color(Color::new(0.8, 0.3, 0.2));

    println!(
        "{:>6} {:>6}   {:^20} {:^20}   {:>7} {:>7} {:>6}",
        "lat", "lon", "gouraud (r g b)", "phong (r g b)", "px", "py", "depth"
    );

    // Latitude/longitude ring over the camera-facing hemisphere
    for lat_step in 1..4 {
        let lat = (lat_step as f32 / 4.0 - 0.5) * std::f32::consts::PI;
        for lon_step in 0..6 {
            let lon = (lon_step as f32 / 6.0 - 0.5) * std::f32::consts::PI;

            // On a unit sphere the normal equals the position
            let normal = Vec3::new(
                lat.cos() * lon.sin(),
                lat.sin(),
                lat.cos() * lon.cos(),
            );
            let point = normal;

            let base = texture.sample(lon_step as f32 / 6.0, lat_step as f32 / 4.0);
            let gouraud = lights.shade_gouraud(point, normal, base, eye, material)?;
            let phong = lights.shade_phong(point, normal, base, eye, material)?;

            let pixel = camera.project_point(point.extend(1.0))?;

            println!(
                "{:>6.2} {:>6.2}   {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>6.3}   {:>7.1} {:>7.1} {:>6.2}",
                lat,
                lon,
                clamp_display(gouraud).x,
                clamp_display(gouraud).y,
                clamp_display(gouraud).z,
                clamp_display(phong).x,
                clamp_display(phong).y,
                clamp_display(phong).z,
                pixel.x,
                pixel.y,
                pixel.z,
            );
        }
    }

    Ok(())
}

/// Clamp radiance to [0, 1] for display; the core leaves it unclamped.
fn clamp_display(c: Color) -> Color {
    c.clamp(Vec3::ZERO, Vec3::ONE)
}
