use crate::math::Real;

/// Checks that `dx` can be used as a particle spacing.
///
/// The spacing must be finite and strictly positive. A spacing failing this
/// test makes every sampling operation produce no particle.
#[inline]
pub fn is_valid_spacing(dx: Real) -> bool {
    dx.is_finite() && dx > 0.0
}
