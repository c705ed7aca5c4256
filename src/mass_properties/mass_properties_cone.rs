use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Rotation, Vector};
use core::ops::Sub;
use na::RealField;

/// Volume integrals of a homogeneous truncated cone of unit density.
///
/// The frustum is expressed in its local frame: its axis is `+z`, its
/// bottom disk (radius `radius_bottom`) lies on `z = 0` and its top disk
/// (radius `radius_top`) on `z = height`. All integrals are taken with
/// respect to that frame, which makes them additive: a hollow shell is the
/// difference between the moments of two nested frustums.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FrustumMoments {
    /// The volume `∫ dV`.
    pub volume: Real,
    /// The first axial moment `∫ z dV`.
    pub first_moment: Real,
    /// The second moment around the axis `∫ (x² + y²) dV`.
    pub axial: Real,
    /// The second moment around the `x` axis of the base plane `∫ (y² + z²) dV`.
    pub transverse: Real,
}

impl FrustumMoments {
    /// Integrates a frustum spanning `z ∈ [0, height]`.
    ///
    /// Negative radii are treated as zero. A frustum with a non-positive
    /// height or two zero radii has all its moments set to zero.
    pub fn new(radius_bottom: Real, radius_top: Real, height: Real) -> Self {
        let rb = radius_bottom.max(0.0);
        let rt = radius_top.max(0.0);

        if height <= 0.0 || (rb == 0.0 && rt == 0.0) {
            return Self::default();
        }

        let pi = Real::pi();
        let h = height;
        // ∫ r² dz, ∫ r² z dz, ∫ r² z² dz and ∫ r⁴ dz for r(z) linear from rb to rt.
        let r2 = h * (rb * rb + rb * rt + rt * rt) / 3.0;
        let r2z = h * h * (rb * rb + 2.0 * rb * rt + 3.0 * rt * rt) / 12.0;
        let r2z2 = h * h * h * (rb * rb + 3.0 * rb * rt + 6.0 * rt * rt) / 30.0;
        let r4 = h
            * (rb * rb * rb * rb
                + rb * rb * rb * rt
                + rb * rb * rt * rt
                + rb * rt * rt * rt
                + rt * rt * rt * rt)
            / 5.0;

        Self {
            volume: pi * r2,
            first_moment: pi * r2z,
            axial: pi * r4 / 2.0,
            transverse: pi * r4 / 4.0 + pi * r2z2,
        }
    }

    /// The moments of the same solid translated by `dz` along its axis.
    pub fn translated_along_axis(&self, dz: Real) -> Self {
        Self {
            volume: self.volume,
            first_moment: self.first_moment + dz * self.volume,
            axial: self.axial,
            transverse: self.transverse + 2.0 * dz * self.first_moment + dz * dz * self.volume,
        }
    }

    /// The height of the centroid along the axis, or zero for an empty solid.
    pub fn centroid_height(&self) -> Real {
        if self.volume > 0.0 {
            self.first_moment / self.volume
        } else {
            0.0
        }
    }

    /// The principal inertia around the centroid of this solid with the given total mass.
    ///
    /// The components are ordered as the local axes `(x, y, z)`, `z` being
    /// the axis of revolution.
    pub fn principal_inertia(&self, mass: Real) -> PrincipalAngularInertia {
        if self.volume <= 0.0 {
            return na::zero();
        }

        let density = mass / self.volume;
        let zc = self.centroid_height();
        let transverse = (self.transverse - self.volume * zc * zc).max(0.0) * density;
        let axial = self.axial.max(0.0) * density;

        Vector::new(transverse, transverse, axial)
    }
}

impl Sub for FrustumMoments {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            volume: self.volume - rhs.volume,
            first_moment: self.first_moment - rhs.first_moment,
            axial: self.axial - rhs.axial,
            transverse: self.transverse - rhs.transverse,
        }
    }
}

impl MassProperties {
    /// Computes the mass properties of a solid described by its frustum moments.
    ///
    /// The resulting center of mass lies on the local `z` axis.
    pub fn from_frustum_moments(mass: Real, moments: &FrustumMoments) -> Self {
        Self::with_principal_inertia_frame(
            Point::new(0.0, 0.0, moments.centroid_height()),
            mass,
            moments.principal_inertia(mass),
            Rotation::identity(),
        )
    }
}
