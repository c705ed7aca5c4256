//! Point containment queries.

pub use self::point_query::PointQuery;

mod point_cone;
mod point_query;
