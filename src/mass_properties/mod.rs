//! Mass properties (mass, inertia, center-of-mass) of primitives.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_cone::FrustumMoments;

mod mass_properties;
mod mass_properties_cone;
