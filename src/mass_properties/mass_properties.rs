use crate::math::{Point, PrincipalAngularInertia, Real, Rotation};
use crate::utils;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a primitive, as handed to a rigid-body engine.
pub struct MassProperties {
    /// The center of mass of the primitive expressed in its local-space.
    pub local_com: Point,
    /// The inverse of the mass of the primitive.
    ///
    /// If this is zero, the primitive is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the square root of the principal angular inertia of the primitive.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: PrincipalAngularInertia,
    /// The principal vectors of the local angular inertia tensor of the primitive.
    pub principal_inertia_local_frame: Rotation,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the primitive.
    /// The principal angular inertia are the angular inertia along the coordinate axes in the local-space
    /// of the primitive.
    pub fn new(local_com: Point, mass: Real, principal_inertia: PrincipalAngularInertia) -> Self {
        Self::with_principal_inertia_frame(local_com, mass, principal_inertia, Rotation::identity())
    }

    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes defined by
    /// the `principal_inertia_local_frame` expressed in the local-space of the primitive.
    pub fn with_principal_inertia_frame(
        local_com: Point,
        mass: Real,
        principal_inertia: PrincipalAngularInertia,
        principal_inertia_local_frame: Rotation,
    ) -> Self {
        let inv_mass = utils::inv(mass);
        let inv_principal_inertia_sqrt = principal_inertia.map(|e| utils::inv(e.sqrt()));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
            principal_inertia_local_frame,
        }
    }

    /// The mass.
    pub fn mass(&self) -> Real {
        utils::inv(self.inv_mass)
    }

    /// The angular inertia along the principal inertia axes.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia {
        self.inv_principal_inertia_sqrt.map(|e| utils::inv(e * e))
    }
}
