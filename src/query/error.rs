use crate::shape::PrimitiveType;

/// Errors reported by the operations of a [`Primitive`](crate::shape::Primitive).
///
/// Geometric edge cases (degenerate shapes, points on the boundary, invalid
/// spacings) are never reported as errors: they produce zero volumes or empty
/// fills. Only code paths a primitive does not implement are surfaced here.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveError {
    /// The operation is not implemented for this kind of primitive.
    #[error("{primitive:?}::{operation} not implemented")]
    NotImplemented {
        /// The kind of primitive the operation was called on.
        primitive: PrimitiveType,
        /// The name of the operation.
        operation: &'static str,
    },
}
