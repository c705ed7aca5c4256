use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Cone;

impl PointQuery for Cone {
    /// Tests if `pt`, expressed in the cone's local frame, is inside of the
    /// truncated cone inflated by `tolerance`.
    ///
    /// The local frame has the base center at its origin and the cone axis
    /// along `+z`. The axial coordinate must lie in `[-tolerance, height +
    /// tolerance]` and the distance to the axis must not exceed the radius
    /// interpolated at that height plus `tolerance`.
    #[inline]
    fn contains_local_point(&self, pt: &Point, tolerance: Real) -> bool {
        if pt.z < -tolerance || pt.z > self.height() + tolerance {
            return false;
        }

        let radius = self.radius_at(pt.z) + tolerance;
        radius >= 0.0 && pt.x * pt.x + pt.y * pt.y <= radius * radius
    }
}
