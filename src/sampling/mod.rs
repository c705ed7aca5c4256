//! Particle sampling of primitives.
//!
//! Two fills are provided for each primitive. The border fill places
//! particles on the surface, ring by ring, with a spacing close to `dx`. The
//! volume fill keeps the nodes of a cubic lattice of spacing `dx` lying
//! strictly inside the primitive. Both append world-space points to a
//! caller-owned buffer.

pub use self::utils::{disk_radii, push_ring, ring_size};

mod cone_to_particles;
pub mod utils;
