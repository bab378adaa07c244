//! Sphere primitive and the ray-sphere intersection test.

use glam::Vec3A;

use crate::ray::Ray;

/// Sphere defined by center and radius.
///
/// This renderer has no material system and no nearest-hit bookkeeping, so
/// the sphere only answers a yes/no intersection query.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,
    /// Radius of the sphere (always non-negative).
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Test whether the ray intersects the sphere.
    ///
    /// Solves |r(t) - center|^2 = radius^2 as the quadratic
    /// a*t^2 + b*t + c = 0 and reports a hit iff the discriminant
    /// b^2 - 4ac is strictly positive. Tangent rays (discriminant == 0)
    /// count as misses; the strict threshold is intentional and must not
    /// change without revisiting the shading policy.
    pub fn hit(&self, ray: &Ray) -> bool {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        discriminant > 0.0
    }
}
