use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Cone;

/// Computes the local-space AABB of a cone of the given largest radius and height.
#[inline]
pub fn local_cone_aabb(max_radius: Real, height: Real) -> Aabb {
    let r = max_radius.max(0.0);
    Aabb::new(Point::new(-r, -r, 0.0), Point::new(r, r, height.max(0.0)))
}

impl Cone {
    /// Computes the world-space AABB of this cone.
    ///
    /// The eight corners of the local box are placed in the world and
    /// enclosed, so the result bounds the cone for every orientation.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.local_aabb().transform_by(&self.position())
    }

    /// Computes the local-space AABB of this cone.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        local_cone_aabb(self.max_radius(), self.height())
    }
}
