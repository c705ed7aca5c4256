use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real};
use crate::shape::Cone;
use rapier3d::prelude::{
    ColliderBuilder, ColliderSet, MassProperties as RapierMassProperties, RigidBodyBuilder,
    RigidBodyHandle, RigidBodySet, SharedShape,
};

/// The number of segments discretizing the circles of a cone collider.
const COLLIDER_SUBDIVISIONS: usize = 32;

/// The handle of a rigid body in the [`PhysicsEngine`].
pub type BodyHandle = RigidBodyHandle;

/// The collision geometry of a primitive.
pub type CollisionShape = SharedShape;

/// The rigid bodies and colliders primitives are inserted into.
///
/// The sets can be handed to a rapier physics pipeline to step the simulation.
#[derive(Default)]
pub struct PhysicsEngine {
    /// The rigid bodies of the simulation.
    pub bodies: RigidBodySet,
    /// The colliders attached to the rigid bodies.
    pub colliders: ColliderSet,
}

impl PhysicsEngine {
    /// Creates an engine without any body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body placed at `position` with the given local mass properties.
    ///
    /// Dynamic bodies are moved by the simulation, the other ones are
    /// kinematic and only follow the positions they are given. The collider,
    /// if any, is attached with a zero density so that the body mass is
    /// exactly `mprops`.
    pub(crate) fn insert_body(
        &mut self,
        position: Isometry,
        mprops: &MassProperties,
        shape: Option<SharedShape>,
        dynamic: bool,
    ) -> RigidBodyHandle {
        let builder = if dynamic {
            RigidBodyBuilder::dynamic()
        } else {
            RigidBodyBuilder::kinematic_position_based()
        };
        let body = builder
            .position(position)
            .additional_mass_properties(RapierMassProperties::with_principal_inertia_frame(
                mprops.local_com,
                mprops.mass(),
                mprops.principal_inertia(),
                mprops.principal_inertia_local_frame,
            ))
            .build();
        let handle = self.bodies.insert(body);

        if let Some(shape) = shape {
            let collider = ColliderBuilder::new(shape).density(0.0).build();
            let _ = self
                .colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }

        log::debug!(
            "Inserted {} body {:?} with mass {}.",
            if dynamic { "dynamic" } else { "kinematic" },
            handle,
            mprops.mass()
        );

        handle
    }
}

impl Cone {
    /// The convex collision shape of this cone inflated by `dx / 2`.
    ///
    /// The inflation makes the collider enclose the border particles. The
    /// shape is expressed in the local frame of the cone. Returns `None` for
    /// a degenerate cone.
    pub(crate) fn collision_shape(&self, dx: Real) -> Option<SharedShape> {
        if self.is_degenerate() {
            log::warn!("No collision shape for the degenerate cone {:?}.", self);
            return None;
        }

        let margin = if crate::utils::is_valid_spacing(dx) {
            dx / 2.0
        } else {
            0.0
        };
        let mut points = Vec::with_capacity(2 * COLLIDER_SUBDIVISIONS);
        push_circle(self.radius_bottom() + margin, -margin, &mut points);
        push_circle(self.radius_top() + margin, self.height() + margin, &mut points);

        let shape = SharedShape::convex_hull(&points);
        if shape.is_none() {
            log::warn!("Failed to compute the convex hull of the cone {:?}.", self);
        }
        shape
    }
}

fn push_circle(radius: Real, z: Real, out: &mut Vec<Point>) {
    use na::{ComplexField, RealField};

    let dtheta = Real::two_pi() / COLLIDER_SUBDIVISIONS as Real;
    out.extend((0..COLLIDER_SUBDIVISIONS).map(|i| {
        let theta = i as Real * dtheta;
        Point::new(
            ComplexField::cos(theta) * radius,
            ComplexField::sin(theta) * radius,
            z,
        )
    }));
}
