//! Various unsorted numerical helpers.

pub(crate) use self::inv::inv;
pub use self::spacing::is_valid_spacing;

mod inv;
mod spacing;
