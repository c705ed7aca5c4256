use crate::body::{BodyHandle, CollisionShape, PhysicsEngine};
use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, PrincipalAngularInertia, Real, Rotation, Vector};
use crate::query::{PointQuery, PrimitiveError};
use crate::shape::Cone;
use downcast_rs::{impl_downcast, DowncastSync};

/// Enum representing the type of a primitive.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// A truncated cone primitive.
    Cone,
}

/// The physical state shared by every primitive.
///
/// The mass is supplied from outside, the inertia is derived from it by
/// [`Primitive::set_inertia`]. The collision geometry and the rigid body only
/// exist once [`Primitive::geom_create`] and [`Primitive::body_create`] have
/// been called with a physics engine compiled in.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ObjectState {
    /// The mass of the primitive.
    pub mass: Real,
    /// The principal inertia around the center of mass, in the local axes.
    pub inertia: PrincipalAngularInertia,
    /// The collision geometry handed to the physics engine.
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub geometry: Option<CollisionShape>,
    /// The rigid body created for this primitive.
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub body: Option<BodyHandle>,
}

impl Default for ObjectState {
    fn default() -> Self {
        ObjectState {
            mass: 0.0,
            inertia: PrincipalAngularInertia::zeros(),
            geometry: None,
            body: None,
        }
    }
}

/// Trait implemented by every primitive particles can be seeded from.
///
/// A primitive exposes its physical properties (volume, inertia, mass), its
/// world-space bounds and containment test, and the two particle fills: the
/// border fill samples its surface, the volume fill samples its interior.
/// Fills append to a caller-owned buffer and never clear it.
pub trait Primitive: DowncastSync {
    /// The type of this primitive.
    fn primitive_type(&self) -> PrimitiveType;

    /// The physical state of this primitive.
    fn state(&self) -> &ObjectState;

    /// The mutable physical state of this primitive.
    fn state_mut(&mut self) -> &mut ObjectState;

    /// The rigid transformation from the local frame of this primitive to the world.
    fn position(&self) -> Isometry;

    /// The volume of matter held by this primitive for the particle spacing `dx`.
    ///
    /// Only hollow primitives depend on `dx`.
    fn volume(&self, dx: Real) -> Real;

    /// Computes and stores the principal inertia from the current mass.
    ///
    /// The mass is never recomputed: call [`Primitive::set_mass`] or
    /// [`Primitive::set_mass_from_density`] first.
    fn set_inertia(&mut self, dx: Real);

    /// The center of mass, in the local frame, for the particle spacing `dx`.
    fn local_center_of_mass(&self, dx: Real) -> Point;

    /// The world-space axis-aligned box enclosing this primitive.
    fn bounding_box(&self) -> Aabb;

    /// Translates this primitive.
    fn shift(&mut self, offset: &Vector);

    /// Replaces the orientation of this primitive.
    fn set_orientation(&mut self, orientation: Rotation);

    /// Appends world-space particles sampling the surface of this primitive.
    fn fill_border(&self, points: &mut Vec<Point>, dx: Real);

    /// Counts the interior lattice nodes of spacing `dx`, appending them to
    /// `points` if `fill` is `true`.
    ///
    /// The count is the same whether `fill` is set or not.
    fn fill(&self, points: &mut Vec<Point>, dx: Real, fill: bool) -> usize;

    /// Is the world-space `point` inside this primitive enlarged by `tolerance`?
    ///
    /// A negative `tolerance` shrinks the primitive.
    fn is_inside(&self, point: &Point, tolerance: Real) -> bool;

    /// Counts the interior lattice nodes of spacing `dx` without storing them.
    fn count_fill(&self, dx: Real) -> usize {
        self.fill(&mut Vec::new(), dx, false)
    }

    /// Appends `layers` layers of particles below the surface of this primitive.
    ///
    /// Primitives without layered fill return [`PrimitiveError::NotImplemented`]
    /// and leave `points` untouched.
    fn fill_in(
        &self,
        _points: &mut Vec<Point>,
        _dx: Real,
        _layers: usize,
    ) -> Result<usize, PrimitiveError> {
        Err(PrimitiveError::NotImplemented {
            primitive: self.primitive_type(),
            operation: "fill_in",
        })
    }

    /// The world-space center of mass for the particle spacing `dx`.
    fn center_of_mass(&self, dx: Real) -> Point {
        self.position() * self.local_center_of_mass(dx)
    }

    /// The mass of this primitive.
    fn mass(&self) -> Real {
        self.state().mass
    }

    /// Sets the mass of this primitive.
    ///
    /// The stored inertia is left untouched.
    fn set_mass(&mut self, mass: Real) {
        self.state_mut().mass = mass;
    }

    /// Sets the mass from a density and returns it.
    fn set_mass_from_density(&mut self, dx: Real, density: Real) -> Real {
        let mass = self.volume(dx) * density;
        self.set_mass(mass);
        mass
    }

    /// The principal inertia stored by the last call to [`Primitive::set_inertia`].
    fn inertia(&self) -> PrincipalAngularInertia {
        self.state().inertia
    }

    /// The local mass properties made of the stored mass and inertia.
    fn mass_properties(&self, dx: Real) -> MassProperties {
        MassProperties::new(
            self.local_center_of_mass(dx),
            self.mass(),
            self.inertia(),
        )
    }

    /// Builds the collision geometry handed to the physics engine.
    ///
    /// Without a physics engine this does nothing.
    fn geom_create(&mut self, _dx: Real) {
        log::debug!(
            "{:?}: no collision geometry is created without a physics engine.",
            self.primitive_type()
        );
    }

    /// Inserts a rigid body for this primitive into `engine`.
    ///
    /// Returns `None` if no physics engine is available.
    fn body_create(
        &mut self,
        _engine: &mut PhysicsEngine,
        _dx: Real,
        _dynamic: bool,
    ) -> Option<BodyHandle> {
        log::debug!(
            "{:?}: no rigid body is created without a physics engine.",
            self.primitive_type()
        );
        None
    }

    /// The rigid body created for this primitive, if any.
    fn body(&self) -> Option<BodyHandle> {
        self.state().body
    }
}

impl_downcast!(sync Primitive);

impl dyn Primitive {
    /// Converts this abstract primitive to the given concrete primitive, if it is one.
    pub fn as_primitive<T: Primitive>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract primitive to a mutable concrete primitive, if it is one.
    pub fn as_primitive_mut<T: Primitive>(&mut self) -> Option<&mut T> {
        self.downcast_mut()
    }

    /// Converts this abstract primitive to a cone, if it is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        self.downcast_ref()
    }

    /// Converts this abstract primitive to a mutable cone, if it is one.
    pub fn as_cone_mut(&mut self) -> Option<&mut Cone> {
        self.downcast_mut()
    }
}

impl Primitive for Cone {
    fn primitive_type(&self) -> PrimitiveType {
        PrimitiveType::Cone
    }

    fn state(&self) -> &ObjectState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ObjectState {
        &mut self.state
    }

    fn position(&self) -> Isometry {
        Cone::position(self)
    }

    fn volume(&self, dx: Real) -> Real {
        self.frustum_moments(dx).volume.max(0.0)
    }

    fn set_inertia(&mut self, dx: Real) {
        let moments = self.frustum_moments(dx);
        self.state.inertia = if moments.volume > 0.0 {
            moments.principal_inertia(self.state.mass)
        } else {
            PrincipalAngularInertia::zeros()
        };

        log::debug!(
            "Cone inertia for mass {}: {:?}",
            self.state.mass,
            self.state.inertia
        );
    }

    fn local_center_of_mass(&self, dx: Real) -> Point {
        Point::new(0.0, 0.0, self.frustum_moments(dx).centroid_height())
    }

    fn bounding_box(&self) -> Aabb {
        self.aabb()
    }

    fn shift(&mut self, offset: &Vector) {
        Cone::shift(self, offset)
    }

    fn set_orientation(&mut self, orientation: Rotation) {
        Cone::set_orientation(self, orientation)
    }

    fn fill_border(&self, points: &mut Vec<Point>, dx: Real) {
        self.fill_border_with_caps(points, dx, true, true)
    }

    fn fill(&self, points: &mut Vec<Point>, dx: Real, fill: bool) -> usize {
        self.fill_lattice(points, dx, fill)
    }

    fn is_inside(&self, point: &Point, tolerance: Real) -> bool {
        self.contains_point(&Cone::position(self), point, tolerance)
    }

    #[cfg(feature = "rapier")]
    fn geom_create(&mut self, dx: Real) {
        self.state.geometry = self.collision_shape(dx);
    }

    #[cfg(feature = "rapier")]
    fn body_create(
        &mut self,
        engine: &mut PhysicsEngine,
        dx: Real,
        dynamic: bool,
    ) -> Option<BodyHandle> {
        if self.state.geometry.is_none() {
            self.geom_create(dx);
        }

        let handle = engine.insert_body(
            Cone::position(self),
            &self.mass_properties(dx),
            self.state.geometry.clone(),
            dynamic,
        );
        self.state.body = Some(handle);
        Some(handle)
    }
}
