//! Primitives supported by sphprim.

pub use self::cone::{Cone, Solidity};
pub use self::primitive::{ObjectState, Primitive, PrimitiveType};

mod cone;
mod primitive;
