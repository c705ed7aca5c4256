//! Rigid bodies created from primitives.
//!
//! The physics engine is selected at compile-time. With the `rapier` feature,
//! [`PhysicsEngine`] wraps the body and collider sets of a rapier world and
//! primitives insert themselves into it. Without it, [`PhysicsEngine`] is an
//! empty placeholder, no [`BodyHandle`] can exist, and body creation is a
//! no-op returning `None`.

#[cfg(not(feature = "rapier"))]
pub use self::no_engine::{BodyHandle, CollisionShape, PhysicsEngine};
#[cfg(feature = "rapier")]
pub use self::rapier_engine::{BodyHandle, CollisionShape, PhysicsEngine};

#[cfg(not(feature = "rapier"))]
mod no_engine;
#[cfg(feature = "rapier")]
mod rapier_engine;
