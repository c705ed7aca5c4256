//! Non-persistent geometric queries.
//!
//! Point-containment is achieved by importing the [`query::PointQuery`](PointQuery) trait.
//! Primitives use it to decide whether a lattice node belongs to them, and
//! scene-construction code uses it to clip particles produced by other
//! primitives.

pub use self::error::PrimitiveError;
pub use self::point::PointQuery;

mod error;
pub mod point;
