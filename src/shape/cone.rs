//! Truncated cone primitive.

use crate::mass_properties::FrustumMoments;
use crate::math::{
    canonical_axis, rotation_from_canonical_axis, Isometry, Matrix, Point, Real, Rotation,
    Translation, Vector, DEFAULT_EPSILON,
};
use crate::shape::ObjectState;
use na::Rotation3;

/// Whether a primitive is a solid body or a shell one particle thick.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Solidity {
    /// The primitive is filled with matter.
    #[default]
    Solid,
    /// Only a layer of thickness `dx` below the surface is filled with matter.
    Hollow,
}

/// A truncated right cone.
///
/// In its local frame, the cone has the center of its bottom disk at the
/// origin and its axis along `+z`: the bottom disk of radius
/// `radius_bottom` lies on `z = 0` and the top disk of radius `radius_top`
/// on `z = height`. The `origin` and `orientation` place that frame in the
/// world.
///
/// Equal radii make a cylinder, and a zero radius makes a full cone with its
/// apex at the corresponding end.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Cone {
    origin: Point,
    radius_top: Real,
    radius_bottom: Real,
    height: Real,
    half_aperture: Real,
    orientation: Rotation,
    solidity: Solidity,
    pub(crate) state: ObjectState,
}

impl Default for Cone {
    /// An all-zero placeholder cone, to be re-parametrized before use.
    fn default() -> Self {
        Self::new(Point::origin(), 0.0, 0.0, 0.0, Rotation::identity())
    }
}

impl Cone {
    /// Creates a new cone from its canonical parameters.
    ///
    /// # Arguments:
    /// * `origin` - the world-space center of the bottom disk.
    /// * `radius_top` - the radius of the disk at the end of the axis.
    /// * `radius_bottom` - the radius of the disk at `origin`.
    /// * `height` - the length of the cone along its axis.
    /// * `orientation` - the rotation mapping `+z` to the cone axis.
    ///
    /// No validation is performed: degenerate cones (zero height or zero
    /// radii) are accepted and have a zero volume and empty fills.
    pub fn new(
        origin: Point,
        radius_top: Real,
        radius_bottom: Real,
        height: Real,
        orientation: Rotation,
    ) -> Cone {
        let mut orientation = orientation;
        let _ = orientation.renormalize();

        Cone {
            origin,
            radius_top,
            radius_bottom,
            height,
            half_aperture: Self::compute_half_aperture(radius_top, radius_bottom, height),
            orientation,
            solidity: Solidity::Solid,
            state: ObjectState::default(),
        }
    }

    /// Creates a new cone spanning the vector `axis` from `origin`.
    ///
    /// The height is the norm of `axis` and the orientation is the shortest
    /// rotation mapping `+z` to `axis`.
    pub fn from_axis(origin: Point, radius_top: Real, radius_bottom: Real, axis: Vector) -> Cone {
        Self::new(
            origin,
            radius_top,
            radius_bottom,
            axis.norm(),
            rotation_from_canonical_axis(&axis),
        )
    }

    /// Creates a new cone from its axis and two vectors pointing to its rims.
    ///
    /// `base_rim` goes from `origin` to a point of the bottom rim, and
    /// `top_rim` to a point of the top rim (either from `origin` or from the
    /// top center). Only the components of the rim vectors orthogonal to
    /// `axis` are used: their norms are the radii, and the direction of
    /// `base_rim` (or of `top_rim` if the bottom radius is zero) becomes the
    /// local `+x` axis of the cone.
    pub fn from_rim_vectors(origin: Point, axis: Vector, base_rim: Vector, top_rim: Vector) -> Cone {
        let height = axis.norm();
        let axis_dir = axis
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(|| canonical_axis().into_inner());

        let base_offset = base_rim.dot(&axis_dir);
        if base_offset.abs() > DEFAULT_EPSILON.sqrt() * base_rim.norm() {
            log::warn!(
                "Cone bottom rim vector is not orthogonal to the axis (axial offset {}), using its orthogonal component.",
                base_offset
            );
        }

        let base_radial = base_rim - axis_dir * base_offset;
        let top_radial = top_rim - axis_dir * top_rim.dot(&axis_dir);
        let radius_bottom = base_radial.norm();
        let radius_top = top_radial.norm();

        let orientation = match base_radial
            .try_normalize(DEFAULT_EPSILON)
            .or_else(|| top_radial.try_normalize(DEFAULT_EPSILON))
        {
            Some(x) => {
                let y = axis_dir.cross(&x);
                let basis = Matrix::from_columns(&[x, y, axis_dir]);
                Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis))
            }
            None => rotation_from_canonical_axis(&axis),
        };

        Self::new(origin, radius_top, radius_bottom, height, orientation)
    }

    fn compute_half_aperture(radius_top: Real, radius_bottom: Real, height: Real) -> Real {
        if height > 0.0 {
            ((radius_bottom - radius_top) / height).atan()
        } else {
            0.0
        }
    }

    /// Sets whether this cone is a solid or a hollow shell.
    pub fn with_solidity(mut self, solidity: Solidity) -> Self {
        self.solidity = solidity;
        self
    }

    /// Sets whether this cone is a solid or a hollow shell.
    pub fn set_solidity(&mut self, solidity: Solidity) {
        self.solidity = solidity;
    }

    /// Whether this cone is a solid or a hollow shell.
    #[inline]
    pub fn solidity(&self) -> Solidity {
        self.solidity
    }

    /// The world-space center of the bottom disk.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The radius of the top disk.
    #[inline]
    pub fn radius_top(&self) -> Real {
        self.radius_top
    }

    /// The radius of the bottom disk.
    #[inline]
    pub fn radius_bottom(&self) -> Real {
        self.radius_bottom
    }

    /// The largest of the two radii.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.radius_top.max(self.radius_bottom)
    }

    /// The length of the cone along its axis.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }

    /// The angle between the lateral surface and the axis.
    ///
    /// Positive when the cone narrows towards its top, negative when it
    /// widens, zero for a cylinder.
    #[inline]
    pub fn half_aperture(&self) -> Real {
        self.half_aperture
    }

    /// The rotation mapping `+z` to the cone axis.
    #[inline]
    pub fn orientation(&self) -> &Rotation {
        &self.orientation
    }

    /// The world-space vector going from the bottom center to the top center.
    #[inline]
    pub fn axis(&self) -> Vector {
        self.orientation * (canonical_axis().into_inner() * self.height)
    }

    /// The rigid transformation from the local frame of the cone to the world.
    #[inline]
    pub fn position(&self) -> Isometry {
        Isometry::from_parts(Translation::from(self.origin.coords), self.orientation)
    }

    /// The length of the lateral surface along a meridian.
    #[inline]
    pub fn slant_height(&self) -> Real {
        (self.height * self.height
            + (self.radius_bottom - self.radius_top) * (self.radius_bottom - self.radius_top))
            .sqrt()
    }

    /// The radius of the cross-section at the height `z` of the local frame.
    ///
    /// `z` is clamped to `[0, height]`.
    #[inline]
    pub fn radius_at(&self, z: Real) -> Real {
        if self.height <= 0.0 {
            return self.max_radius();
        }

        let t = (z / self.height).clamp(0.0, 1.0);
        self.radius_bottom * (1.0 - t) + self.radius_top * t
    }

    /// Is this cone a cylinder?
    pub fn is_cylinder(&self) -> bool {
        relative_eq!(self.radius_top, self.radius_bottom)
    }

    /// Does this cone end with an apex?
    pub fn is_full_cone(&self) -> bool {
        !self.is_cylinder() && (self.radius_top == 0.0 || self.radius_bottom == 0.0)
    }

    /// Is this cone unable to hold any matter?
    ///
    /// This is the case if its height is not strictly positive, if both its
    /// radii are zero, or if any parameter is not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.height.is_finite() && self.radius_top.is_finite() && self.radius_bottom.is_finite())
            || self.height <= 0.0
            || (self.radius_top <= 0.0 && self.radius_bottom <= 0.0)
    }

    /// Computes the volume integrals of the matter held by this cone.
    ///
    /// For a hollow cone, the matter is the difference between this cone and
    /// its points farther than `dx` from the surface: the nested frustum
    /// spanning `[dx, height - dx]` whose lateral surface is the lateral
    /// surface of this cone moved inward by `dx`.
    pub fn frustum_moments(&self, dx: Real) -> FrustumMoments {
        if self.is_degenerate() {
            return FrustumMoments::default();
        }

        let outer = FrustumMoments::new(self.radius_bottom, self.radius_top, self.height);

        match self.solidity {
            Solidity::Solid => outer,
            Solidity::Hollow => outer - self.inner_frustum_moments(dx.max(0.0)),
        }
    }

    /// The moments of the points of this non-degenerate cone farther than `dx` from its surface.
    fn inner_frustum_moments(&self, dx: Real) -> FrustumMoments {
        // Moving the lateral surface by `dx` along its normal shrinks every
        // cross-section by `dx / cos(half_aperture)`.
        let offset = dx * self.slant_height() / self.height;
        let (mut z0, mut z1) = (dx, self.height - dx);

        if z1 <= z0 {
            return FrustumMoments::default();
        }

        let mut r0 = self.radius_at(z0) - offset;
        let mut r1 = self.radius_at(z1) - offset;

        if r0 <= 0.0 && r1 <= 0.0 {
            return FrustumMoments::default();
        }

        // Cut the inner profile where it crosses the axis.
        if r0 < 0.0 {
            z0 += (z1 - z0) * -r0 / (r1 - r0);
            r0 = 0.0;
        } else if r1 < 0.0 {
            z1 = z0 + (z1 - z0) * r0 / (r0 - r1);
            r1 = 0.0;
        }

        FrustumMoments::new(r0, r1, z1 - z0).translated_along_axis(z0)
    }

    /// Translates this cone by `offset`.
    pub fn shift(&mut self, offset: &Vector) {
        self.origin += offset;
    }

    /// Replaces the orientation of this cone.
    pub fn set_orientation(&mut self, orientation: Rotation) {
        let mut orientation = orientation;
        let _ = orientation.renormalize();
        self.orientation = orientation;
    }
}
