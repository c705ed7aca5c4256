//! Linear algebra type aliases.

use na::{
    Isometry3, Matrix3, Point3, RealField, Translation3, UnitQuaternion, UnitVector3, Vector3,
};

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector3<Real>;

/// The matrix type.
pub type Matrix = Matrix3<Real>;

/// The transformation matrix type.
pub type Isometry = Isometry3<Real>;

/// The rotation type.
///
/// Rotations are the orientation of a primitive: they map the primitive's
/// canonical axis (local `+z`) to its world-space axis.
pub type Rotation = UnitQuaternion<Real>;

/// The translation type.
pub type Translation = Translation3<Real>;

/// The principal angular inertia of a rigid body.
pub type PrincipalAngularInertia = Vector3<Real>;

/// The canonical axis of every primitive, expressed in its local frame.
#[inline]
pub fn canonical_axis() -> UnitVector {
    Vector::z_axis()
}

/// The rotation mapping the canonical axis `+z` onto `axis`.
///
/// This is the shortest-arc rotation, except when `axis` points along `-z`
/// where it is a half turn around `+x`. A zero `axis` yields the identity.
pub fn rotation_from_canonical_axis(axis: &Vector) -> Rotation {
    if axis.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        return Rotation::identity();
    }

    Rotation::rotation_between(&Vector::z(), axis)
        .unwrap_or_else(|| Rotation::from_axis_angle(&Vector::x_axis(), Real::pi()))
}
