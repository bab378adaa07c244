//! Per-ray color resolution.
//!
//! Rays that intersect the sphere shade flat red. Everything else gets a
//! vertical sky gradient driven only by the normalized direction's
//! y-component, independent of x and z.

use glam::Vec3A;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::ray::Ray;

/// Normalize a ray's direction, rejecting zero-length vectors.
///
/// glam's `normalize` would silently divide by zero; a zero direction is a
/// caller bug and surfaces as [`RenderError::InvalidDirection`] instead.
pub fn unit_direction(ray: &Ray) -> Result<Vec3A, RenderError> {
    if ray.direction.length_squared() == 0.0 {
        return Err(RenderError::InvalidDirection);
    }
    Ok(ray.direction.normalize())
}

/// Resolve the color for a single ray, each component in [0,1].
///
/// Hit: the configured hit color. Miss: blend factor
/// t = 0.5 * (unit_direction.y + 1) maps y in [-1,1] to [0,1], then
/// lerp from the bottom sky color to the top sky color.
pub fn ray_color(ray: &Ray, config: &RenderConfig) -> Result<Vec3A, RenderError> {
    if config.sphere.hit(ray) {
        return Ok(config.hit_color);
    }

    let t = 0.5 * (unit_direction(ray)?.y + 1.0);
    Ok((1.0 - t) * config.sky_bottom + t * config.sky_top)
}

/// Convert a color to three bytes in R,G,B order.
///
/// Channels are clamped to [0,1] before scaling, so out-of-range colors
/// saturate instead of wrapping. In-range channels map via
/// floor(255.999 * channel), giving 1.0 the full 255.
pub fn to_rgb_bytes(color: Vec3A) -> [u8; 3] {
    let clamped = color.clamp(Vec3A::ZERO, Vec3A::ONE);
    [
        (255.999 * clamped.x) as u8,
        (255.999 * clamped.y) as u8,
        (255.999 * clamped.z) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    const TOLERANCE: f32 = 1e-5;

    fn assert_close(actual: Vec3A, expected: Vec3A) {
        assert!(
            (actual - expected).length() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn unit_direction_has_length_one() {
        let directions = [
            Vec3A::new(1.0, 0.0, 0.0),
            Vec3A::new(3.0, -4.0, 12.0),
            Vec3A::new(-0.001, 0.002, -0.003),
            Vec3A::new(1000.0, 2000.0, -500.0),
        ];
        for d in directions {
            let unit = unit_direction(&Ray::new(Vec3A::ZERO, d)).unwrap();
            assert!((unit.length() - 1.0).abs() < TOLERANCE, "direction {d:?}");
        }
    }

    #[test]
    fn zero_direction_is_rejected() {
        let ray = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::ZERO);
        assert!(matches!(
            unit_direction(&ray),
            Err(RenderError::InvalidDirection)
        ));
        assert!(matches!(
            ray_color(&ray, &RenderConfig::default()),
            Err(RenderError::InvalidDirection)
        ));
    }

    #[test]
    fn hitting_ray_shades_red() {
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&ray, &config).unwrap(), Vec3A::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn horizontal_ray_shades_gradient_midpoint() {
        // y == 0 after normalization gives t = 0.5, the exact midpoint blend
        // of white and sky-blue.
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));
        assert_close(
            ray_color(&ray, &config).unwrap(),
            Vec3A::new(0.75, 0.85, 1.0),
        );
    }

    #[test]
    fn straight_up_shades_sky_top() {
        // t = 1 selects the top color with no blending at all.
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&ray, &config).unwrap(), config.sky_top);
    }

    #[test]
    fn straight_down_shades_sky_bottom() {
        // The sphere sits at (0,0,-1), so a straight-down ray misses it.
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, -1.0, 0.0));
        assert_eq!(ray_color(&ray, &config).unwrap(), config.sky_bottom);
    }

    #[test]
    fn gradient_ignores_x_and_z() {
        let config = RenderConfig {
            // Shrink the sphere to nothing so every ray misses.
            sphere: Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.0),
            ..RenderConfig::default()
        };
        let a = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 1.0, 0.0));
        let b = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 1.0));
        assert_close(
            ray_color(&a, &config).unwrap(),
            ray_color(&b, &config).unwrap(),
        );
    }

    #[test]
    fn byte_conversion_floors_and_saturates() {
        assert_eq!(to_rgb_bytes(Vec3A::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        // Out-of-range channels clamp instead of wrapping.
        assert_eq!(to_rgb_bytes(Vec3A::new(-0.5, 2.0, 1.0)), [0, 255, 255]);
    }
}
