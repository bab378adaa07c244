//! Ray representation.
//!
//! A ray is the half-line r(t) = origin + t * direction for t >= 0; every
//! pixel of the output image is shaded by exactly one of these.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates, the camera position
    /// for every ray this renderer produces.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Stored exactly as given, never implicitly normalized. The intersection
    /// test works with the raw direction; only the sky gradient normalizes.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
