/// The physics engine used when none is compiled in.
#[derive(Copy, Clone, Debug, Default)]
pub struct PhysicsEngine;

impl PhysicsEngine {
    /// Creates the placeholder engine.
    pub fn new() -> Self {
        PhysicsEngine
    }
}

/// The handle of a rigid body.
///
/// This type has no value: without a physics engine, no body is ever created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyHandle {}

/// The collision geometry of a primitive.
///
/// This type has no value: without a physics engine, no geometry is ever created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionShape {}
