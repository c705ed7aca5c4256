use crate::math::{Isometry, Point, Real};

/// Trait of objects that can be tested for point inclusion.
///
/// Every test accepts an absolute `tolerance`, in the same units as the
/// coordinates. A positive tolerance inflates the object so that points
/// lying on (or slightly off) its boundary count as inside; a negative
/// tolerance shrinks it so that only points strictly inside are accepted.
pub trait PointQuery {
    /// Tests if the given point is inside of `self`, up to `tolerance`.
    ///
    /// The point is assumed to be expressed in the local-space of `self`.
    fn contains_local_point(&self, pt: &Point, tolerance: Real) -> bool;

    /// Tests if the given point is inside of `self` transformed by `m`, up to `tolerance`.
    #[inline]
    fn contains_point(&self, m: &Isometry, pt: &Point, tolerance: Real) -> bool {
        self.contains_local_point(&m.inverse_transform_point(pt), tolerance)
    }
}
