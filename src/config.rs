//! Render configuration.
//!
//! Every constant of the pipeline lives here instead of being scattered as
//! globals, so tests can render at alternate resolutions and geometries.

use glam::Vec3A;

use crate::sphere::Sphere;

/// Scene, camera, and image parameters for one render.
///
/// The same 3-tuple type serves as point, direction, and RGB color in [0,1];
/// the geometric and color math are genuinely identical operations.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Width over height of the output image.
    pub aspect_ratio: f32,
    /// Output image width in pixels; height is derived from the aspect ratio.
    pub image_width: u32,
    /// Height of the virtual image plane in world units.
    pub viewport_height: f32,
    /// Distance from the camera origin to the image plane.
    pub focal_length: f32,
    /// Camera position in world space.
    pub camera_origin: Vec3A,
    /// The single sphere in the scene.
    pub sphere: Sphere,
    /// Color returned for rays that intersect the sphere.
    pub hit_color: Vec3A,
    /// Gradient color at the bottom of the sky (rays pointing straight down).
    pub sky_bottom: Vec3A,
    /// Gradient color at the top of the sky (rays pointing straight up).
    pub sky_top: Vec3A,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 1024,
            viewport_height: 2.0,
            focal_length: 1.0,
            camera_origin: Vec3A::ZERO,
            sphere: Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5),
            hit_color: Vec3A::new(1.0, 0.0, 0.0),
            sky_bottom: Vec3A::new(1.0, 1.0, 1.0),
            sky_top: Vec3A::new(0.5, 0.7, 1.0),
        }
    }
}

impl RenderConfig {
    /// Output image height derived from width and aspect ratio.
    ///
    /// Truncates toward zero and is clamped to at least one row.
    pub fn image_height(&self) -> u32 {
        let height = (self.image_width as f32 / self.aspect_ratio) as u32;
        height.max(1)
    }

    /// Width of the virtual image plane in world units.
    pub fn viewport_width(&self) -> f32 {
        self.viewport_height * self.aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_height_matches_aspect_ratio() {
        let config = RenderConfig::default();
        assert_eq!(config.image_height(), 576);
    }

    #[test]
    fn tiny_width_truncates_height() {
        // 4 / (16/9) = 2.25, truncated to 2 rows.
        let config = RenderConfig {
            image_width: 4,
            ..RenderConfig::default()
        };
        assert_eq!(config.image_height(), 2);
    }

    #[test]
    fn height_never_reaches_zero() {
        let config = RenderConfig {
            image_width: 1,
            ..RenderConfig::default()
        };
        assert_eq!(config.image_height(), 1);
    }
}
